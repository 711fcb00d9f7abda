//! Request lifecycle state.

use crate::client::{SummarizeError, SummaryResult};
use crate::ui::mvi::UiState;

/// Which kind of failure ended a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Empty or whitespace-only input; no request was made.
    Validation,
    /// The service answered with a non-success status.
    ServiceRejection,
    /// No response was obtained.
    Transport,
    /// Success status with an unexpected body.
    MalformedResponse,
}

/// A failed submission as the user sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    /// User-facing message. Never empty.
    pub message: String,
}

impl From<&SummarizeError> for Failure {
    fn from(err: &SummarizeError) -> Self {
        let kind = match err {
            SummarizeError::Validation => FailureKind::Validation,
            SummarizeError::ServiceRejection { .. } => FailureKind::ServiceRejection,
            SummarizeError::Transport(_) => FailureKind::Transport,
            SummarizeError::MalformedResponse(_) => FailureKind::MalformedResponse,
        };
        Self {
            kind,
            message: err.user_message(),
        }
    }
}

/// State of the summarization request.
///
/// Exactly one variant is active, so an error, a result and the pending
/// indicator can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SummaryState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Pending {
        /// Identifies the in-flight request; resolutions for other ids are stale.
        request_id: u64,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The last submission failed.
    Failed(Failure),

    /// The last submission produced a summary.
    Succeeded(SummaryResult),
}

impl UiState for SummaryState {}

impl SummaryState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    /// Id of the in-flight request, if any.
    pub fn request_id(&self) -> Option<u64> {
        match self {
            Self::Pending { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.failure().map(|failure| failure.message.as_str())
    }

    pub fn result(&self) -> Option<&SummaryResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}
