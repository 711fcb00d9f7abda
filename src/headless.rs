//! One-shot mode: submit once, wait for the outcome, return the final state.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::client::SummaryService;
use crate::ui::summary::{
    Resolution, ResolutionSink, SubmissionController, SubmitOutcome, SummaryState,
};

/// Run a single submission of `text` to completion.
///
/// Must be called from within a tokio runtime. Returns `Failed` right away for
/// blank text, otherwise whatever the request settled to.
pub async fn summarize_once(service: Arc<dyn SummaryService>, text: &str) -> SummaryState {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink: ResolutionSink = Arc::new(move |resolution: Resolution| {
        let _ = tx.send(resolution);
    });

    let mut controller = SubmissionController::new(service, Handle::current(), sink);
    // Every dispatched request is settled through the sink, panics included.
    if let SubmitOutcome::Dispatched { .. } = controller.submit(text) {
        if let Some(resolution) = rx.recv().await {
            controller.resolve(resolution);
        }
    }
    controller.into_state()
}
