//! Client side of the summarization service.
//!
//! The service itself is an external collaborator. This module only knows its
//! wire contract:
//!
//! ```text
//! POST {base_url}/summarize_raw   {"text": "..."}
//!   2xx  -> {"summary": "...", "top_actions": ["...", ...]}
//!   else -> {"detail": "..."}   (detail optional)
//! ```

mod error;
mod http;
mod traits;
mod types;

pub use error::{
    SummarizeError, MALFORMED_RESPONSE_MESSAGE, REJECTION_FALLBACK_MESSAGE,
    TRANSPORT_FALLBACK_MESSAGE, VALIDATION_MESSAGE,
};
pub use http::{parse_summary, rejection_message, SummarizerClient, SUMMARIZE_PATH};
pub use traits::SummaryService;
pub use types::{SummarizeRequest, SummaryResult};
