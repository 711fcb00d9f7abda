use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TITLE: &str = "Email Summary";
const SUBTITLE: &str = "Wklej treść emaili lub notatki i wygeneruj inteligentne podsumowanie";

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, endpoint: &str) -> Paragraph<'static> {
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(SUBTITLE, Style::default().fg(HEADER_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint.to_string(), Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
