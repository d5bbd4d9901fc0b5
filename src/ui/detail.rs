use crate::models::{ChatState, Element};
use crate::ui::chat::draw_chat;
use crate::ui::layout::{calculate_detail_chunks, centered_rect};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const NOT_AVAILABLE: &str = "N/A";

pub fn draw_detail(f: &mut Frame, element: &Element, chat: &mut ChatState) {
    let area = centered_rect(84, 85, f.area());
    f.render_widget(Clear, area);
    let layout = calculate_detail_chunks(area);

    draw_properties(f, layout.properties_area, element);
    draw_chat(f, layout.chat_area, chat);
}

fn fmt_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{} {}", trim_float(v), unit),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn trim_float(v: f64) -> String {
    if v == v.trunc() {
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

fn property_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<16}", label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::from(value),
    ])
}

fn draw_properties(f: &mut Frame, area: Rect, element: &Element) {
    let oxidation = if element.oxidation_states.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        element
            .oxidation_states
            .iter()
            .map(|s| format!("{:+}", s))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let discovery = match (&element.discovered_by, element.year_discovered) {
        (Some(who), Some(year)) => format!("{} ({})", who, year),
        (Some(who), None) => who.clone(),
        (None, Some(year)) => year.to_string(),
        (None, None) => NOT_AVAILABLE.to_string(),
    };
    let uses = if element.uses.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        element.uses.join(", ")
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                element.symbol.clone(),
                Style::default()
                    .fg(element.category.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from("  "),
            Span::styled(
                element.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            element.category.label(),
            Style::default().fg(element.category.color()),
        )),
        Line::from(""),
        property_line("Atomic number", element.z.to_string()),
        property_line("Atomic mass", format!("{} u", element.atomic_mass)),
        property_line(
            "Group",
            element
                .group
                .map(|g| g.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ),
        property_line("Period", element.period.to_string()),
        property_line("Block", element.block.label().to_string()),
        property_line("Phase", element.phase.label().to_string()),
        property_line("Density", fmt_value(element.density, "g/cm³")),
        property_line("Melting point", fmt_value(element.melting_point, "K")),
        property_line("Boiling point", fmt_value(element.boiling_point, "K")),
        Line::from(""),
        property_line(
            "Configuration",
            element.electron_configuration.clone(),
        ),
        property_line("Oxidation", oxidation),
        property_line("Discovered", discovery),
        Line::from(""),
        Line::from(Span::styled(
            "Common uses",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    lines.push(Line::from(uses));

    let title = format!(" {} ({}) ", element.name, element.symbol);
    let sheet = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(element.category.color())),
    );
    f.render_widget(sheet, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_render_as_marker() {
        assert_eq!(fmt_value(None, "K"), "N/A");
        assert_eq!(fmt_value(Some(302.9146), "K"), "302.9146 K");
        assert_eq!(fmt_value(Some(1000.0), "K"), "1000 K");
    }

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(5.5), "5.5");
        assert_eq!(trim_float(7.0), "7");
    }
}
