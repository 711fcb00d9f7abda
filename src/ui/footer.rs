//! Bottom bar: key hints on the left, version on the right.

use crate::ui::summary::SummaryState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shortcut, action, and whether the action needs an idle request.
const KEY_HINTS: &[(&str, &str, bool)] = &[
    ("Ctrl+S", "Generate", true),
    ("Ctrl+L", "Clear", false),
    ("Ctrl+Q", "Quit", false),
];

/// Key hints for the current request state.
///
/// Generate is dimmed while a request is in flight, since Ctrl+S is ignored
/// until it settles.
pub fn hints_line(state: &SummaryState) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, (key, action, needs_idle)) in KEY_HINTS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(GLOBAL_BORDER)));
        }
        let enabled = !needs_idle || state.can_submit();
        let (key_style, action_style) = if enabled {
            (
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                Style::default().fg(HEADER_TEXT),
            )
        } else {
            (
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )
        };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {}", action), action_style));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &SummaryState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(hints_line(state)), inner);
    frame.render_widget(
        Paragraph::new(
            Line::styled(format!("v{} ", VERSION), Style::default().fg(MUTED_TEXT))
                .right_aligned(),
        ),
        inner,
    );
}
