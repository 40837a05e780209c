//! Core types for the LLM abstraction layer

use super::config::GenerationConfig;

/// Request to generate content from an LLM
///
/// Each request is a single user prompt with no prior turns.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Text sent to the model as the user turn
    pub prompt: String,
    /// Generation parameters
    pub config: GenerationConfig,
}

impl GenerateRequest {
    pub fn prompt(text: impl Into<String>, config: GenerationConfig) -> Self {
        Self {
            prompt: text.into(),
            config,
        }
    }
}

/// Completed generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    /// Generated text, as returned by the provider
    pub text: String,
    /// Why generation stopped, when the provider says
    pub finish_reason: Option<FinishReason>,
    /// Token accounting, when the provider reports it
    pub usage: Option<UsageMetadata>,
}

/// Reason why generation finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    /// Natural completion
    Stop,
    /// Hit token limit
    MaxTokens,
    /// Blocked by safety filters
    Safety,
    /// Provider-specific reason
    Other(String),
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageMetadata {
    /// Prompt tokens consumed
    pub input_tokens: u32,
    /// Response tokens generated
    pub output_tokens: u32,
    /// Sum of input and output
    pub total_tokens: u32,
}
