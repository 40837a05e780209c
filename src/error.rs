//! Error types for gateway operations

use thiserror::Error;
use warp::http::StatusCode;

use crate::llm::LlmError;
use crate::models::ErrorResponse;

/// Failures of a gateway operation, each with a fixed HTTP mapping
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request is missing required input; never retried
    #[error("{0}")]
    InvalidRequest(String),

    /// The provider call failed; the log is left untouched
    #[error("Failed to generate response: {0}")]
    GenerationFailure(#[from] LlmError),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::GenerationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the client
    pub fn to_response(&self) -> ErrorResponse {
        let status = match self {
            GatewayError::InvalidRequest(_) => None,
            GatewayError::GenerationFailure(_) => Some("error".to_string()),
        };
        ErrorResponse {
            error: self.to_string(),
            status,
        }
    }
}
