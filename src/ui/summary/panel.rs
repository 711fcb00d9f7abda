//! Rendering of the request state: result panel and submit control.
//!
//! Everything here is a pure projection of [`SummaryState`].

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, PANEL_BORDER, STATUS_ERROR, STATUS_OK};

use super::state::SummaryState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Label of the enabled submit control.
pub const SUBMIT_LABEL: &str = "Generuj podsumowanie";

/// Label of the submit control while a request is in flight.
pub const PENDING_LABEL: &str = "Generowanie podsumowania...";

const IDLE_HINT: &str = "Naciśnij Ctrl+S, aby wygenerować podsumowanie.";
const SUMMARY_HEADING: &str = "Streszczenie";
const ACTIONS_HEADING: &str = "Najważniejsze zadania";
const NO_ACTIONS: &str = "(brak zadań)";

fn spinner(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// Title of the result panel.
pub fn panel_title(state: &SummaryState) -> &'static str {
    match state {
        SummaryState::Idle | SummaryState::Pending { .. } => "Wynik",
        SummaryState::Failed(_) => "Błąd",
        SummaryState::Succeeded(_) => "Podsumowanie",
    }
}

/// Body lines of the result panel.
pub fn panel_lines(state: &SummaryState) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted_style = Style::default().fg(MUTED_TEXT);
    let heading_style = Style::default()
        .fg(MUTED_TEXT)
        .add_modifier(Modifier::BOLD);

    match state {
        SummaryState::Idle => vec![Line::styled(IDLE_HINT, muted_style)],

        SummaryState::Pending { animation_tick, .. } => vec![Line::from(vec![
            Span::styled(format!("{} ", spinner(*animation_tick)), Style::default().fg(STATUS_OK)),
            Span::styled(PENDING_LABEL, text_style),
        ])],

        SummaryState::Failed(failure) => vec![Line::styled(
            failure.message.clone(),
            Style::default().fg(STATUS_ERROR),
        )],

        SummaryState::Succeeded(result) => {
            let mut lines = vec![Line::styled(SUMMARY_HEADING, heading_style)];
            lines.extend(
                result
                    .summary
                    .lines()
                    .map(|part| Line::styled(part.to_string(), text_style)),
            );
            lines.push(Line::from(""));
            lines.push(Line::styled(ACTIONS_HEADING, heading_style));

            if result.top_actions.is_empty() {
                lines.push(Line::styled(NO_ACTIONS, muted_style));
            }
            for (number, action) in result.numbered_actions() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}. ", number),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(action.to_string(), text_style),
                ]));
            }
            lines
        }
    }
}

/// Uncoloured projection: title line followed by the panel lines.
pub fn plain_text(state: &SummaryState) -> String {
    let mut out = vec![panel_title(state).to_string()];
    out.extend(panel_lines(state).iter().map(line_text));
    out.join("\n")
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// The submit control. Rendered disabled while a request is pending.
pub fn submit_button_line(state: &SummaryState) -> Line<'static> {
    match state {
        SummaryState::Pending { animation_tick, .. } => Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} {} ", spinner(*animation_tick), PENDING_LABEL),
                Style::default()
                    .fg(MUTED_TEXT)
                    .add_modifier(Modifier::DIM),
            ),
        ]),
        _ => Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", SUBMIT_LABEL),
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+S", Style::default().fg(MUTED_TEXT)),
        ]),
    }
}

/// Render the result panel into `area`.
pub fn render_summary_panel(frame: &mut Frame, area: Rect, state: &SummaryState) {
    let border_color = if state.failure().is_some() {
        STATUS_ERROR
    } else {
        PANEL_BORDER
    };

    let block = Block::default()
        .title(format!(" {} ", panel_title(state)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(panel_lines(state))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
