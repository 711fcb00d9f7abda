//! Intents for the summarization request.

use crate::client::SummaryResult;
use crate::ui::mvi::Intent;

use super::state::Failure;

/// Settled outcome of one dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Id the request was dispatched with.
    pub request_id: u64,
    pub outcome: Result<SummaryResult, Failure>,
}

/// Intents that drive [`super::SummaryState`].
#[derive(Debug, Clone)]
pub enum SummaryIntent {
    /// User submitted `text`. `request_id` is used if the request is dispatched.
    Submit { text: String, request_id: u64 },

    /// A dispatched request settled.
    Resolve(Resolution),

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for SummaryIntent {}
