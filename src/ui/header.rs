use crate::models::ViewMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_header(
    f: &mut Frame,
    area: Rect,
    view: ViewMode,
    query: &str,
    search_focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22),
            Constraint::Min(30),
            Constraint::Length(30),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Periodica",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mut tabs: Vec<Span> = Vec::new();
    for (mode, label) in [
        (ViewMode::Table, " [1] Table "),
        (ViewMode::Trends, " [2] Trends "),
        (ViewMode::Quiz, " [3] Quiz "),
    ] {
        let style = if mode == view {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::from(" "));
    }
    let tab_bar = Paragraph::new(Line::from(tabs))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tab_bar, chunks[1]);

    // Search only applies to the table view.
    if view == ViewMode::Table {
        let content = if query.is_empty() && !search_focused {
            Span::styled("Search elements...", Style::default().fg(Color::DarkGray))
        } else {
            Span::from(query.to_string())
        };
        let search = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" / Search ")
                .border_style(if search_focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
        f.render_widget(search, chunks[2]);
        if search_focused {
            let inner_width = (chunks[2].width as usize).saturating_sub(2);
            let cursor_x = chunks[2].x + 1 + query.len().min(inner_width) as u16;
            f.set_cursor_position((cursor_x, chunks[2].y + 1));
        }
    }
}

pub fn draw_help(f: &mut Frame, area: Rect, view: ViewMode, search_focused: bool) {
    let key = |text: &'static str| {
        Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let spans: Vec<Span> = if search_focused {
        vec![
            Span::from("Type to filter  "),
            key("Enter"),
            Span::from(" Done  "),
            key("Esc"),
            Span::from(" Clear focus"),
        ]
    } else {
        match view {
            ViewMode::Table => vec![
                key("↑/↓/←/→"),
                Span::from(" Move  "),
                key("Enter"),
                Span::from(" Details  "),
                key("/"),
                Span::from(" Search  "),
                key("Tab"),
                Span::from(" View  "),
                key("Esc"),
                Span::from(" Back"),
            ],
            ViewMode::Trends => vec![
                key("←/→"),
                Span::from(" Property  "),
                key("Tab"),
                Span::from(" View  "),
                key("Esc"),
                Span::from(" Back"),
            ],
            ViewMode::Quiz => vec![
                key("1-4"),
                Span::from(" Answer  "),
                key("Tab"),
                Span::from(" View  "),
                key("Esc"),
                Span::from(" Back"),
            ],
        }
    };

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
