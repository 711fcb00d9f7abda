use crate::ui::app::App;
use crate::ui::editor::InputBuffer;
use crate::ui::footer::render_footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::summary::{render_summary_panel, submit_button_line};
use crate::ui::theme::{MUTED_TEXT, PANEL_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const EDITOR_TITLE: &str = " Treść emaili ";
const EDITOR_PLACEHOLDER: &str = "Wklej treść emaili lub notatki. Mogą być jeden pod drugim.";
const EDITOR_HELPER: &str =
    " Możesz wkleić emaile skopiowane z Gmaila, Outlooka lub dowolne notatki tekstowe. ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.endpoint()), header);
    frame.render_widget(Clear, body);

    let (editor_area, button_area, result_area) = body_sections(body);
    render_editor(frame, editor_area, app.editor());
    frame.render_widget(
        Paragraph::new(submit_button_line(app.summary_state())),
        button_area,
    );
    render_summary_panel(frame, result_area, app.summary_state());

    render_footer(frame, footer, app.summary_state());
}

/// Draw the input buffer and place the terminal cursor on it.
///
/// The view scrolls so the cursor always stays inside the block. Columns are
/// measured in display cells, so wide characters keep the cursor aligned.
fn render_editor(frame: &mut Frame<'_>, area: Rect, editor: &InputBuffer) {
    let muted = Style::default().fg(MUTED_TEXT);
    let block = Block::default()
        .title(EDITOR_TITLE)
        .title_bottom(Line::styled(EDITOR_HELPER, muted))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));
    let inner = block.inner(area);

    let (line, _) = editor.cursor_position();
    let column = Line::from(editor.line_before_cursor()).width();
    let scroll_y = scroll_offset(line, inner.height);
    let scroll_x = scroll_offset(column, inner.width);

    let paragraph = if editor.text().is_empty() {
        Paragraph::new(Line::styled(EDITOR_PLACEHOLDER, muted)).block(block)
    } else {
        Paragraph::new(editor.text())
            .block(block)
            .scroll((to_u16(scroll_y), to_u16(scroll_x)))
    };
    frame.render_widget(paragraph, area);

    if inner.width > 0 && inner.height > 0 {
        let x = inner.x.saturating_add(to_u16(column - scroll_x));
        let y = inner.y.saturating_add(to_u16(line - scroll_y));
        frame.set_cursor_position((x, y));
    }
}

/// First visible row/column so that `position` fits in `visible` cells.
fn scroll_offset(position: usize, visible: u16) -> usize {
    match visible as usize {
        0 => 0,
        visible => position.saturating_sub(visible - 1),
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
