use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex::Regex;

/// Render the chat reply markdown to styled lines. Supports the subset the
/// model actually produces: headings, - / * / numbered lists, and inline
/// **bold**, *italic* and `code`.
pub fn render_markdown(content: &str) -> Vec<Line<'static>> {
    let numbered_re = Regex::new(r"^(\d+)\.\s+(.*)$").unwrap();
    let mut result: Vec<Line<'static>> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if let Some(heading) = trimmed
            .strip_prefix("### ")
            .or(trimmed.strip_prefix("## "))
            .or(trimmed.strip_prefix("# "))
        {
            result.push(Line::from(Span::styled(
                heading.to_string(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
            continue;
        }

        if let Some(item) = trimmed.strip_prefix("- ").or(trimmed.strip_prefix("* ")) {
            let mut spans = vec![Span::from("  • ")];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        if let Some(caps) = numbered_re.captures(trimmed) {
            let num = caps.get(1).unwrap().as_str();
            let item = caps.get(2).unwrap().as_str();
            let mut spans = vec![Span::from(format!("  {}. ", num))];
            spans.extend(parse_inline(item));
            result.push(Line::from(spans));
            continue;
        }

        if trimmed.is_empty() {
            result.push(Line::from(""));
        } else {
            result.push(Line::from(parse_inline(line)));
        }
    }

    result
}

fn parse_inline(text: &str) -> Vec<Span<'static>> {
    let inline_re = Regex::new(r"(\*\*(.+?)\*\*|\*(.+?)\*|`([^`]+)`)").unwrap();
    let mut spans = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some(m) = inline_re.find(remaining) else {
            spans.push(Span::from(remaining.to_string()));
            break;
        };
        if m.start() > 0 {
            spans.push(Span::from(remaining[..m.start()].to_string()));
        }

        let caps = inline_re.captures(m.as_str()).unwrap();
        if let Some(bold) = caps.get(2) {
            spans.push(Span::styled(
                bold.as_str().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        } else if let Some(italic) = caps.get(3) {
            spans.push(Span::styled(
                italic.as_str().to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        } else if let Some(code) = caps.get(4) {
            spans.push(Span::styled(
                code.as_str().to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        remaining = &remaining[m.end()..];
    }

    if spans.is_empty() {
        spans.push(Span::from(text.to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let result = render_markdown("Hello world");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].to_string(), "Hello world");
    }

    #[test]
    fn test_bold_preserved() {
        let result = render_markdown("**bold**");
        let line = &result[0];
        assert_eq!(line.spans.len(), 1);
        assert!(line.spans[0].style.add_modifier.intersects(Modifier::BOLD));
        assert_eq!(line.spans[0].content, "bold");
    }

    #[test]
    fn test_italic_rendering() {
        let result = render_markdown("*italic*");
        assert!(result[0].spans[0]
            .style
            .add_modifier
            .intersects(Modifier::ITALIC));
    }

    #[test]
    fn test_code_rendering() {
        let result = render_markdown("`H2O`");
        assert_eq!(result[0].spans[0].content, "H2O");
    }

    #[test]
    fn test_mixed_inline() {
        let result = render_markdown("Helium is **inert** and *light*");
        let line = &result[0];
        assert!(line.spans.len() >= 4);
        assert_eq!(line.spans[0].content, "Helium is ");
        assert!(line.spans[1].style.add_modifier.intersects(Modifier::BOLD));
    }

    #[test]
    fn test_unordered_list() {
        let result = render_markdown("- Jewelry\n- Electronics\n* Dentistry");
        assert_eq!(result.len(), 3);
        assert!(result[0].to_string().contains("•"));
        assert!(result[2].to_string().contains("Dentistry"));
    }

    #[test]
    fn test_numbered_list() {
        let result = render_markdown("1. Protons\n2. Neutrons");
        assert_eq!(result.len(), 2);
        assert!(result[0].to_string().contains("1."));
        assert!(result[0].to_string().contains("Protons"));
    }

    #[test]
    fn test_heading() {
        let result = render_markdown("### Oxidation States");
        assert_eq!(result.len(), 1);
        assert!(result[0].spans[0].style.add_modifier.intersects(Modifier::BOLD));
        assert_eq!(result[0].spans[0].content, "Oxidation States");
    }

    #[test]
    fn test_empty_lines_kept() {
        let result = render_markdown("Line 1\n\nLine 2");
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].to_string(), "");
    }
}
