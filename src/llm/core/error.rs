//! Error types for the LLM layer

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling an LLM provider
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failures and non-success HTTP statuses
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded {
        message: String,
        retry_after: Option<Duration>,
    },

    /// Structured error reported by the provider
    #[error("Provider error ({code}): {message}")]
    ProviderError { code: String, message: String },

    /// The prompt was rejected by the provider's safety filters
    #[error("Prompt blocked: {0}")]
    Blocked(String),

    /// The provider answered without any text
    #[error("Empty response from provider")]
    EmptyResponse,
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
        LlmError::HttpError {
            status,
            body: err.to_string(),
        }
    }
}
