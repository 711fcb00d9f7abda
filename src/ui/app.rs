use crate::ui::editor::InputBuffer;
use crate::ui::summary::{Resolution, SubmissionController, SubmitOutcome, SummaryState};

/// Application state for one terminal session.
///
/// Owns the input buffer and the submission controller. Nothing here is
/// shared with other sessions.
pub struct App {
    should_quit: bool,
    editor: InputBuffer,
    summary: SubmissionController,
    endpoint: String,
}

impl App {
    pub fn new(editor: InputBuffer, summary: SubmissionController, endpoint: String) -> Self {
        Self {
            should_quit: false,
            editor,
            summary,
            endpoint,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn editor(&self) -> &InputBuffer {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut InputBuffer {
        &mut self.editor
    }

    pub fn summary_state(&self) -> &SummaryState {
        self.summary.state()
    }

    /// Service URL shown in the header.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit the current buffer contents.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.summary.submit(self.editor.text())
    }

    pub fn on_paste(&mut self, text: &str) {
        self.editor.insert_str(text);
    }

    pub fn on_summary_resolved(&mut self, resolution: Resolution) {
        self.summary.resolve(resolution);
    }

    pub fn on_tick(&mut self) {
        self.summary.on_tick();
    }
}
