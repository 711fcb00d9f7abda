//! Error taxonomy for summarization requests.

use thiserror::Error;

/// Shown when the input is empty or whitespace only.
pub const VALIDATION_MESSAGE: &str = "Proszę wpisać tekst emaili.";

/// Shown when the service rejects a request without a usable `detail`.
pub const REJECTION_FALLBACK_MESSAGE: &str = "Failed to summarize emails";

/// Shown when no HTTP response was obtained at all.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Wystąpił błąd podczas generowania podsumowania.";

/// Shown when a success response does not have the expected shape.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Nieprawidłowa odpowiedź serwera podsumowań.";

/// Errors that can occur while requesting a summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Input text was empty after trimming. No request was made.
    #[error("input text is empty")]
    Validation,

    /// The service answered with a non-success status.
    #[error("service rejected request (status {status}): {message}")]
    ServiceRejection { status: u16, message: String },

    /// No response was obtained (DNS, connection refused, reset, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Success status, but the body is not a valid summary.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SummarizeError {
    /// Message to show the user. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Validation => VALIDATION_MESSAGE.to_string(),
            SummarizeError::ServiceRejection { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            SummarizeError::ServiceRejection { .. } => REJECTION_FALLBACK_MESSAGE.to_string(),
            SummarizeError::Transport(_) => TRANSPORT_FALLBACK_MESSAGE.to_string(),
            SummarizeError::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE.to_string(),
        }
    }
}
