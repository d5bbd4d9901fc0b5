use crate::grid::{GridLayout, PlacedElement, Placeholder};
use crate::models::Element;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const GRID_COLUMNS: u16 = 18;
/// 7 main-body rows, a separator row, then the two detached f-block rows.
const GRID_ROWS: u16 = 10;

pub fn draw_table(f: &mut Frame, area: Rect, grid: &GridLayout, selected_z: Option<u32>) {
    match grid {
        GridLayout::Periodic {
            main,
            lanthanides,
            actinides,
            placeholders,
        } => draw_periodic(f, area, main, lanthanides, actinides, placeholders, selected_z),
        GridLayout::Flow(matches) => draw_flow(f, area, matches, selected_z),
    }
}

struct CellGeometry {
    origin_x: u16,
    origin_y: u16,
    cell_w: u16,
    cell_h: u16,
    area: Rect,
}

impl CellGeometry {
    fn new(area: Rect) -> Self {
        let cell_w = (area.width / GRID_COLUMNS).clamp(2, 6);
        let cell_h = (area.height / GRID_ROWS).max(1);
        let grid_w = cell_w * GRID_COLUMNS;
        let origin_x = area.x + area.width.saturating_sub(grid_w) / 2;
        CellGeometry {
            origin_x,
            origin_y: area.y,
            cell_w,
            cell_h,
            area,
        }
    }

    /// Rect for a 1-based (column, row) pair, or None when it falls outside
    /// the drawable area on small terminals.
    fn cell(&self, column: u16, row: u16) -> Option<Rect> {
        let x = self.origin_x + (column - 1) * self.cell_w;
        let y = self.origin_y + (row - 1) * self.cell_h;
        if x + self.cell_w > self.area.right() || y + self.cell_h > self.area.bottom() {
            return None;
        }
        Some(Rect::new(x, y, self.cell_w, self.cell_h))
    }
}

fn element_style(element: &Element, selected: bool) -> Style {
    let mut style = Style::default()
        .fg(element.category.color())
        .add_modifier(Modifier::BOLD);
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn draw_cell(f: &mut Frame, rect: Rect, element: &Element, selected: bool) {
    let cell = Paragraph::new(Span::styled(
        element.symbol.clone(),
        element_style(element, selected),
    ))
    .alignment(Alignment::Center);
    f.render_widget(cell, rect);
}

#[allow(clippy::too_many_arguments)]
fn draw_periodic(
    f: &mut Frame,
    area: Rect,
    main: &[PlacedElement],
    lanthanides: &[PlacedElement],
    actinides: &[PlacedElement],
    placeholders: &[Placeholder; 2],
    selected_z: Option<u32>,
) {
    let geometry = CellGeometry::new(area);

    for cell in main {
        if let Some(rect) = geometry.cell(cell.column, cell.row) {
            draw_cell(f, rect, cell.element, selected_z == Some(cell.element.z));
        }
    }

    for placeholder in placeholders {
        if let Some(rect) = geometry.cell(placeholder.column, placeholder.row) {
            let marker = Paragraph::new(Span::styled(
                placeholder.label,
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center);
            f.render_widget(marker, rect);
        }
    }

    // Detached f-block rows sit below the main body with one spacer row.
    let f_block_offset = 8;
    for cell in lanthanides.iter().chain(actinides) {
        if let Some(rect) = geometry.cell(cell.column, cell.row + f_block_offset) {
            draw_cell(f, rect, cell.element, selected_z == Some(cell.element.z));
        }
    }
}

const CHIP_WIDTH: u16 = 16;

fn draw_flow(f: &mut Frame, area: Rect, matches: &[&Element], selected_z: Option<u32>) {
    if matches.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No elements found matching your search.",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        let y = area.y + area.height / 2;
        f.render_widget(empty, Rect::new(area.x, y, area.width, 1));
        return;
    }

    let columns = (area.width / CHIP_WIDTH).max(1);
    for (i, element) in matches.iter().enumerate() {
        let col = i as u16 % columns;
        let row = i as u16 / columns;
        let y = area.y + row * 2;
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(area.x + col * CHIP_WIDTH, y, CHIP_WIDTH - 1, 1).intersection(area);
        if rect.width == 0 {
            continue;
        }
        let label = format!("{:>3} {}", element.symbol, element.name);
        let chip = Paragraph::new(Span::styled(
            crate::utils::truncate_string(&label, (CHIP_WIDTH - 1) as usize),
            element_style(element, selected_z == Some(element.z)),
        ));
        f.render_widget(chip, rect);
    }
}
