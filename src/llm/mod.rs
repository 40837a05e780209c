//! LLM Abstraction Layer
//!
//! A provider-neutral interface for single-shot text generation, with a
//! Google Gemini implementation.

pub mod core;
pub mod gemini;

// Re-export commonly used types
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::LlmProvider,
    types::{FinishReason, GenerateRequest, GenerateResponse, UsageMetadata},
};

pub use gemini::GeminiClient;
