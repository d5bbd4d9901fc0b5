use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ExplorerLayout {
    pub header_area: Rect,
    pub content_area: Rect,
    pub help_area: Rect,
}

pub struct DetailLayout {
    pub properties_area: Rect,
    pub chat_area: Rect,
}

pub fn calculate_explorer_chunks(area: Rect) -> ExplorerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    ExplorerLayout {
        header_area: chunks[0],
        content_area: chunks[1],
        help_area: chunks[2],
    }
}

/// Split the element detail popup into the property sheet and the chat panel.
pub fn calculate_detail_chunks(area: Rect) -> DetailLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    DetailLayout {
        properties_area: chunks[0],
        chat_area: chunks[1],
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = calculate_explorer_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.content_area.height > 0);
    }

    #[test]
    fn test_detail_layout_splits_horizontally() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_detail_chunks(area);

        assert_eq!(layout.properties_area.width, 45);
        assert_eq!(layout.chat_area.width, 55);
        assert_eq!(layout.properties_area.height, layout.chat_area.height);
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 100);
        let rect = centered_rect(80, 50, area);

        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 50);
        assert_eq!(rect.x, 10);
        assert_eq!(rect.y, 25);
    }
}
