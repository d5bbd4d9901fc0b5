pub mod markdown;

pub use markdown::render_markdown;

use ratatui::text::Text;
use unicode_width::UnicodeWidthChar;

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// Rough visual height of `text` once wrapped to `width` columns. Used for
/// scroll-bound calculations, not exact rendering.
pub fn estimate_text_height(text: &Text, width: usize) -> usize {
    if width == 0 {
        return text.lines.len();
    }
    text.lines
        .iter()
        .map(|line| {
            let w = line.width();
            if w == 0 { 1 } else { w.div_ceil(width) }
        })
        .sum()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height.saturating_sub(visible_height).min(u16::MAX as usize) as u16
}

/// Simulate ratatui's `Wrap { trim: true }` behavior: explicit newlines and
/// width-based wrapping, trailing whitespace trimmed per visual line.
/// Returns (line_text, start_index, end_index) per visual line.
fn simulate_wrapped_lines(text: &str, max_width: usize) -> Vec<(String, usize, usize)> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;
    let mut line_start_idx = 0;

    for (char_idx, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push((current_line.trim_end().to_string(), line_start_idx, char_idx));
            current_line = String::new();
            current_width = 0;
            line_start_idx = char_idx + 1;
        } else {
            let char_width = ch.width().unwrap_or(1);
            if current_width + char_width > max_width && current_width > 0 {
                lines.push((current_line.trim_end().to_string(), line_start_idx, char_idx));
                current_line = ch.to_string();
                current_width = char_width;
                line_start_idx = char_idx;
            } else {
                current_line.push(ch);
                current_width += char_width;
            }
        }
    }

    if !current_line.is_empty() || text.ends_with('\n') {
        lines.push((current_line.trim_end().to_string(), line_start_idx, text.len()));
    }

    lines
}

/// Map a cursor byte index inside `text` to its (visual line, column) once
/// the text is wrapped to `max_width`.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor_index: usize,
    max_width: usize,
) -> (usize, usize) {
    if text.is_empty() || cursor_index == 0 {
        return (0, 0);
    }

    let wrapped_lines = simulate_wrapped_lines(text, max_width);

    for (line_idx, (_, start_idx, end_idx)) in wrapped_lines.iter().enumerate() {
        if cursor_index >= *start_idx && cursor_index <= *end_idx {
            return (line_idx, cursor_index.saturating_sub(*start_idx));
        }
    }

    if let Some((_, _, last_end)) = wrapped_lines.last()
        && cursor_index >= *last_end
    {
        let last_line_idx = wrapped_lines.len().saturating_sub(1);
        let last_line_len = wrapped_lines
            .last()
            .map(|(text, _, _)| text.chars().count())
            .unwrap_or(0);
        return (last_line_idx, last_line_len);
    }

    (0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Line;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_estimate_text_height_single_line() {
        let text = Text::from("hello");
        assert_eq!(estimate_text_height(&text, 10), 1);
    }

    #[test]
    fn test_estimate_text_height_wrapping() {
        let text = Text::from("a".repeat(25));
        assert_eq!(estimate_text_height(&text, 10), 3);
    }

    #[test]
    fn test_estimate_text_height_empty_lines_count() {
        let text = Text::from(vec![Line::from(""), Line::from("x")]);
        assert_eq!(estimate_text_height(&text, 10), 2);
    }

    #[test]
    fn test_calculate_max_scroll() {
        assert_eq!(calculate_max_scroll(10, 4), 6);
        assert_eq!(calculate_max_scroll(4, 10), 0);
    }

    #[test]
    fn test_cursor_position_empty_text() {
        assert_eq!(calculate_wrapped_cursor_position("", 0, 10), (0, 0));
    }

    #[test]
    fn test_cursor_position_single_line() {
        assert_eq!(calculate_wrapped_cursor_position("Hello", 3, 10), (0, 3));
    }

    #[test]
    fn test_cursor_position_wraps_to_second_line() {
        let text = "This is a long line that should wrap";
        assert_eq!(calculate_wrapped_cursor_position(text, 15, 10), (1, 5));
    }

    #[test]
    fn test_cursor_position_beyond_text() {
        assert_eq!(calculate_wrapped_cursor_position("Hi", 10, 10), (0, 2));
    }

    #[test]
    fn test_cursor_position_with_newlines() {
        let text = "Line 1\nLine 2";
        assert_eq!(calculate_wrapped_cursor_position(text, 8, 20), (1, 1));
    }

    #[test]
    fn test_simulate_wrapped_lines_explicit_newlines() {
        let lines = simulate_wrapped_lines("Line 1\nLine 2\nLine 3", 20);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, "Line 1");
        assert_eq!(lines[2].0, "Line 3");
    }
}
