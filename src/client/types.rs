use serde::{Deserialize, Serialize};

/// Body of `POST /summarize_raw`.
///
/// Carries the text exactly as the user typed it, untrimmed.
#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub text: &'a str,
}

/// Successful response of the summarization service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Short summary of the whole input.
    pub summary: String,
    /// Suggested tasks, most important first. Order is kept as received.
    pub top_actions: Vec<String>,
}

impl SummaryResult {
    /// Action items paired with their 1-based position.
    pub fn numbered_actions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.top_actions
            .iter()
            .enumerate()
            .map(|(idx, action)| (idx + 1, action.as_str()))
    }
}
