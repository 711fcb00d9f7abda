//! Submission controller: turns a submit into at most one in-flight request.

use std::sync::Arc;
use tokio::runtime::Handle;

use crate::client::{SummaryService, TRANSPORT_FALLBACK_MESSAGE};
use crate::ui::mvi::Reducer;

use super::intent::{Resolution, SummaryIntent};
use super::reducer::SummaryReducer;
use super::state::{Failure, FailureKind, SummaryState};

/// Receives the resolution of a dispatched request.
///
/// Called from a runtime task. The receiver must hand the resolution back to
/// the owner of the controller, which applies it with
/// [`SubmissionController::resolve`].
pub type ResolutionSink = Arc<dyn Fn(Resolution) + Send + Sync>;

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request was sent; its resolution will carry `request_id`.
    Dispatched { request_id: u64 },
    /// The input was blank. State is `Failed`, nothing was sent.
    Rejected,
    /// A request is already in flight. Nothing changed.
    Ignored,
}

pub struct SubmissionController {
    state: SummaryState,
    service: Arc<dyn SummaryService>,
    runtime: Handle,
    sink: ResolutionSink,
    last_request_id: u64,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn SummaryService>, runtime: Handle, sink: ResolutionSink) -> Self {
        Self {
            state: SummaryState::default(),
            service,
            runtime,
            sink,
            last_request_id: 0,
        }
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    pub fn into_state(self) -> SummaryState {
        self.state
    }

    /// Submit `text` for summarization.
    ///
    /// Blank text fails synchronously. Otherwise the previous error or result
    /// is cleared, state becomes `Pending`, and the untrimmed text is sent on
    /// the runtime.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        if self.state.is_pending() {
            tracing::debug!(
                request_id = ?self.state.request_id(),
                "Submit ignored, request already in flight"
            );
            return SubmitOutcome::Ignored;
        }

        let request_id = self.last_request_id + 1;
        self.apply(SummaryIntent::Submit {
            text: text.to_string(),
            request_id,
        });

        if self.state.request_id() != Some(request_id) {
            tracing::debug!("Submit rejected, input is blank");
            return SubmitOutcome::Rejected;
        }

        self.last_request_id = request_id;
        self.spawn_request(request_id, text.to_string());
        SubmitOutcome::Dispatched { request_id }
    }

    /// Apply the resolution of a dispatched request.
    ///
    /// Returns `false` if it was stale and dropped.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        if self.state.request_id() != Some(resolution.request_id) {
            tracing::debug!(
                request_id = resolution.request_id,
                "Dropping stale resolution"
            );
            return false;
        }
        self.apply(SummaryIntent::Resolve(resolution));
        true
    }

    /// Advance the pending spinner.
    pub fn on_tick(&mut self) {
        if self.state.is_pending() {
            self.apply(SummaryIntent::AnimationTick);
        }
    }

    fn apply(&mut self, intent: SummaryIntent) {
        self.state = SummaryReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn spawn_request(&self, request_id: u64, text: String) {
        let service = Arc::clone(&self.service);
        let sink = Arc::clone(&self.sink);

        tracing::info!(
            request_id,
            chars = text.chars().count(),
            "Dispatching summarization request"
        );

        let runtime = self.runtime.clone();
        self.runtime.spawn(async move {
            // The call runs in its own task so a panic still settles the request.
            let call = runtime.spawn(async move { service.summarize(&text).await });
            let outcome = match call.await {
                Ok(Ok(result)) => Ok(result),
                Ok(Err(err)) => {
                    tracing::warn!(request_id, error = %err, "Summarization failed");
                    Err(Failure::from(&err))
                }
                Err(err) => {
                    tracing::error!(request_id, error = %err, "Summarization task aborted");
                    Err(Failure {
                        kind: FailureKind::Transport,
                        message: TRANSPORT_FALLBACK_MESSAGE.to_string(),
                    })
                }
            };
            sink(Resolution {
                request_id,
                outcome,
            });
        });
    }
}
