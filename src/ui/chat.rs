use crate::models::{ChatRole, ChatState};
use crate::utils::{calculate_max_scroll, estimate_text_height, render_markdown};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rebuild the rendered message cache. Markdown parsing is the expensive
/// part, so it only runs when the message list changed.
pub fn rebuild_chat_cache(chat: &mut ChatState) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for msg in &chat.messages {
        match msg.role {
            ChatRole::User => {
                lines.push(Line::from(Span::styled(
                    "You:",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                for line in msg.content.lines() {
                    lines.push(Line::from(format!("  {}", line)));
                }
                lines.push(Line::from(""));
            }
            ChatRole::Assistant => {
                lines.push(Line::from(Span::styled(
                    "AI:",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                for line in render_markdown(&msg.content) {
                    let mut indented: Vec<Span<'static>> = vec![Span::from("  ")];
                    indented.extend(line.spans);
                    lines.push(Line::from(indented));
                }
                lines.push(Line::from(""));
            }
        }
    }

    chat.rendered_lines_cache = lines;
    chat.cached_message_count = chat.messages.len();
}

pub fn draw_chat(f: &mut Frame, area: Rect, chat: &mut ChatState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    if chat.cached_message_count != chat.messages.len() {
        rebuild_chat_cache(chat);
    }

    let mut message_lines: Vec<Line<'static>> = chat.rendered_lines_cache.clone();

    if chat.is_loading {
        message_lines.push(Line::from(Span::styled(
            "AI is thinking...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let visible_height = chunks[0].height.saturating_sub(2) as usize;
    let text_width = chunks[0].width.saturating_sub(2) as usize;
    let content_text = Text::from(message_lines);
    let content_height = estimate_text_height(&content_text, text_width.max(1));
    let max_scroll = calculate_max_scroll(content_height, visible_height);
    chat.max_scroll = max_scroll;

    // Pin to the bottom while waiting; otherwise honor the user's scroll.
    let scroll = if chat.is_loading {
        max_scroll
    } else {
        chat.scroll_y.min(max_scroll)
    };
    chat.scroll_y = scroll;

    let messages = Paragraph::new(content_text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Lab Assistant ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(messages, chunks[0]);

    let input_text = if chat.input_buffer.is_empty() && !chat.is_loading {
        Text::from(Span::styled(
            "Ask about this element...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(chat.input_buffer.as_str())
    };

    let input = Paragraph::new(input_text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .border_style(if chat.is_loading {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Yellow)
            }),
    );
    f.render_widget(input, chunks[1]);

    if !chat.is_loading {
        let text_width = (chunks[1].width.saturating_sub(2)) as usize;
        let (cursor_line, cursor_col) = crate::utils::calculate_wrapped_cursor_position(
            &chat.input_buffer,
            chat.cursor_position,
            text_width.max(1),
        );
        let cursor_x = chunks[1].x + 1 + cursor_col as u16;
        let cursor_y = chunks[1].y + 1 + cursor_line as u16;
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Send  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Scroll  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Close"),
    ]))
    .alignment(ratatui::layout::Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatMessage;

    #[test]
    fn test_cache_rebuild_tracks_message_count() {
        let mut chat = ChatState::for_element("Neon");
        rebuild_chat_cache(&mut chat);
        assert_eq!(chat.cached_message_count, 1);
        assert!(!chat.rendered_lines_cache.is_empty());

        chat.messages.push(ChatMessage {
            role: ChatRole::User,
            content: "Why does it glow?".to_string(),
        });
        rebuild_chat_cache(&mut chat);
        assert_eq!(chat.cached_message_count, 2);
    }

    #[test]
    fn test_cache_renders_both_roles() {
        let mut chat = ChatState::for_element("Neon");
        chat.messages.push(ChatMessage {
            role: ChatRole::User,
            content: "hello".to_string(),
        });
        rebuild_chat_cache(&mut chat);
        let combined: String = chat
            .rendered_lines_cache
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(combined.contains("You:"));
        assert!(combined.contains("AI:"));
        assert!(combined.contains("hello"));
    }
}
