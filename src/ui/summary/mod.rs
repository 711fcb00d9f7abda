//! Summarization feature: request lifecycle and result panel.
//!
//! Uses the MVI pattern:
//! - `state.rs` - request state enum
//! - `intent.rs` - submit / resolve / tick
//! - `reducer.rs` - state transitions
//! - `controller.rs` - owns the state and performs the network call
//! - `panel.rs` - rendering

mod controller;
mod intent;
mod panel;
mod reducer;
mod state;

pub use controller::{ResolutionSink, SubmissionController, SubmitOutcome};
pub use intent::{Resolution, SummaryIntent};
pub use panel::{
    panel_lines, panel_title, plain_text, render_summary_panel, submit_button_line,
    PENDING_LABEL, SUBMIT_LABEL,
};
pub use reducer::SummaryReducer;
pub use state::{Failure, FailureKind, SummaryState};
