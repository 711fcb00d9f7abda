use super::error::SummarizeError;
use super::types::SummaryResult;

/// Anything that can turn raw text into a summary.
///
/// Implemented by [`super::SummarizerClient`] for the real HTTP service and by
/// test doubles.
#[async_trait::async_trait]
pub trait SummaryService: Send + Sync {
    /// Summarize `text`. The text is sent as given, without trimming.
    async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError>;
}
