//! Gemini provider implementation
//!
//! Client for Google's Gemini models through the public Generative Language
//! API, implementing the LlmProvider trait.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
