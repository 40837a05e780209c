//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResponse},
};

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate content from the LLM
    ///
    /// Sends the request and waits for the complete response. Implementations
    /// must not retry; every failure is returned to the caller as an `LlmError`.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;
}
