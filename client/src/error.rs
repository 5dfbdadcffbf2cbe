//! Fetch error taxonomy.
//!
//! Every failure of the fetch layer is classified into one of four shapes.
//! Classification decides two things downstream: whether the fetch layer
//! retries automatically (transport failures and timeouts only) and what
//! message the page shows (status errors carry a resolved user message).

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// A classified failure from the fetch layer.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The attempt exceeded the configured deadline and was aborted.
    #[error("request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Transport-level failure: DNS, connect, TLS, or a dropped stream.
    #[error("network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Non-success HTTP status with its resolved user message.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response was not the JSON object the API contract promises.
    #[error("invalid response format: {detail}")]
    Format { detail: String },
}

impl FetchError {
    /// Whether the fetch layer may retry this failure automatically.
    ///
    /// Status and format errors already carry a definitive answer from the
    /// server and propagate immediately; the manual retry affordance covers
    /// them instead.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Network { .. })
    }
}

/// Static per-status user messages for error bodies without one.
#[must_use]
pub const fn http_status_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input.",
        401 => "Authentication required. Please log in.",
        403 => "Access denied. You do not have permission.",
        404 => "Data not found. The requested information is unavailable.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "Server error. Please try again later.",
        502 | 503 => "Service temporarily unavailable. Please try again later.",
        _ => "An unexpected error occurred. Please try again.",
    }
}

/// Pull a `message` string out of a JSON error body, if there is one.
#[must_use]
pub fn error_body_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(ToString::to_string)
}
