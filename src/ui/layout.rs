use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the submit control row.
const BUTTON_HEIGHT: u16 = 1;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into input editor, submit control and result panel.
pub fn body_sections(body: Rect) -> (Rect, Rect, Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);
    (sections[0], sections[1], sections[2])
}
