use crate::models::{Category, ALL_CATEGORIES};
use crate::trends::{TrendPoint, TrendProperty, TrendStats, ALL_PROPERTIES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

pub fn draw_trends(
    f: &mut Frame,
    area: Rect,
    property: TrendProperty,
    points: &[TrendPoint],
    stats: Option<&TrendStats>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(10)])
        .split(area);

    draw_property_tabs(f, rows[0], property);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(rows[1]);

    draw_chart(f, columns[0], property, points);
    draw_sidebar(f, columns[1], property, stats);
}

fn draw_property_tabs(f: &mut Frame, area: Rect, active: TrendProperty) {
    let mut spans: Vec<Span> = vec![Span::from(" ")];
    for property in ALL_PROPERTIES {
        let style = if property == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", property.label()), style));
        spans.push(Span::from(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_chart(f: &mut Frame, area: Rect, property: TrendProperty, points: &[TrendPoint]) {
    // One dataset per category so each keeps its own point color.
    let mut series: Vec<(Category, Vec<(f64, f64)>)> = Vec::new();
    for category in ALL_CATEGORIES {
        let data: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.element.category == category)
            .map(|p| (p.z as f64, p.value))
            .collect();
        if !data.is_empty() {
            series.push((category, data));
        }
    }

    let y_max = points.iter().map(|p| p.value).fold(0.0f64, f64::max);
    let y_bound = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let datasets: Vec<Dataset> = series
        .iter()
        .map(|(category, data)| {
            Dataset::default()
                .name(category.label())
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(category.color()))
                .data(data)
        })
        .collect();

    let title = format!(" {} vs Atomic Number ", property.label());
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Atomic Number (Z)")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, 120.0])
                .labels(vec![
                    Span::from("0"),
                    Span::from("30"),
                    Span::from("60"),
                    Span::from("90"),
                    Span::from("120"),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(property.unit())
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_bound])
                .labels(vec![
                    Span::from("0"),
                    Span::from(format!("{:.0}", y_bound / 2.0)),
                    Span::from(format!("{:.0}", y_bound)),
                ]),
        );
    f.render_widget(chart, area);
}

fn draw_sidebar(f: &mut Frame, area: Rect, property: TrendProperty, stats: Option<&TrendStats>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(11)])
        .split(area);

    let about = Paragraph::new(property.description())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" About this Trend "),
        );
    f.render_widget(about, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(stats) = stats {
        lines.push(Line::from(Span::styled(
            "Highest",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "{:.2} {} - {} ({})",
            stats.max.value,
            property.unit(),
            stats.max.element.name,
            stats.max.element.symbol
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Lowest",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "{:.2} {} - {} ({})",
            stats.min.value,
            property.unit(),
            stats.min.element.name,
            stats.min.element.symbol
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Average",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("{:.2} {}", stats.mean, property.unit())));
    } else {
        lines.push(Line::from(Span::styled(
            "No data for this property.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title(" Quick Stats "));
    f.render_widget(panel, chunks[1]);
}
