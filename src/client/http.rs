//! HTTP client for the summarization service.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;

use crate::config::ServiceConfig;

use super::error::{SummarizeError, REJECTION_FALLBACK_MESSAGE};
use super::traits::SummaryService;
use super::types::{SummarizeRequest, SummaryResult};

/// Path of the raw-text summarization endpoint.
pub const SUMMARIZE_PATH: &str = "/summarize_raw";

/// Client for `POST /summarize_raw`.
///
/// One request per call, no retries. The only timeouts are the ones configured
/// on the transport.
pub struct SummarizerClient {
    client: Client,
    endpoint: String,
}

impl SummarizerClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, SummarizeError> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                SUMMARIZE_PATH
            ),
        })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl SummaryService for SummarizerClient {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, SummarizeError> {
        if text.trim().is_empty() {
            return Err(SummarizeError::Validation);
        }

        tracing::debug!(
            url = %self.endpoint,
            chars = text.chars().count(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&SummarizeRequest { text })
            .send()
            .await?;

        // A response arrived, so a failed body read is never a transport error.
        let status = response.status();
        let body = response.text().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = match &body {
                Ok(body) => rejection_message(body),
                Err(err) => {
                    tracing::debug!(error = %err, "Failed to read rejection body");
                    rejection_message("")
                }
            };
            tracing::warn!(
                status = %status,
                latency_ms,
                detail = %message,
                "Summarization service rejected request"
            );
            return Err(SummarizeError::ServiceRejection {
                status: status.as_u16(),
                message,
            });
        }

        let body = body.map_err(|e| SummarizeError::MalformedResponse(e.to_string()))?;
        let result = parse_summary(&body)?;
        tracing::info!(
            status = %status,
            latency_ms,
            actions = result.top_actions.len(),
            "Summary received"
        );
        Ok(result)
    }
}

/// Parse a success body into a [`SummaryResult`].
///
/// Anything that is not an object with a string `summary` and a list of
/// strings in `top_actions` is reported as `MalformedResponse`.
pub fn parse_summary(body: &str) -> Result<SummaryResult, SummarizeError> {
    serde_json::from_str::<SummaryResult>(body)
        .map_err(|e| SummarizeError::MalformedResponse(e.to_string()))
}

/// Extract the user-facing message from a rejection body.
///
/// Uses a non-empty string `detail` verbatim; anything else (no body, not
/// JSON, no `detail`, `detail` of another type) gives the fallback message.
pub fn rejection_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| REJECTION_FALLBACK_MESSAGE.to_string())
}
