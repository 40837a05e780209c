//! Mapping between abstraction types and Gemini types

use std::time::Duration;

use crate::llm::core::{
    config::GenerationConfig,
    error::LlmError,
    types::{FinishReason, GenerateRequest, GenerateResponse, UsageMetadata},
};

use super::types::{
    Content, ErrorResponse, GeminiGenerationConfig, GenerateContentRequest,
    GenerateContentResponse, Part,
};

/// Convert our abstraction request to Gemini's request format
pub fn to_gemini_request(request: GenerateRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part::text(request.prompt)],
        }],
        generation_config: to_gemini_generation_config(request.config),
    }
}

/// Convert generation config to Gemini's format, omitting it entirely when empty
fn to_gemini_generation_config(config: GenerationConfig) -> Option<GeminiGenerationConfig> {
    if config.is_empty() {
        return None;
    }

    Some(GeminiGenerationConfig {
        max_output_tokens: config.max_tokens,
        temperature: config.temperature,
    })
}

/// Convert a Gemini response into a completed generation
///
/// The text is the concatenation of every text part of the first candidate.
/// A blocked prompt or a candidate without text is an error.
pub fn from_gemini_response(response: GenerateContentResponse) -> Result<GenerateResponse, LlmError> {
    let usage = response.usage_metadata.as_ref().map(|u| UsageMetadata {
        input_tokens: u.prompt_token_count,
        output_tokens: u.candidates_token_count,
        total_tokens: u.total_token_count,
    });

    let Some(candidate) = response.candidates.into_iter().next() else {
        if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked(reason));
        }
        return Err(LlmError::EmptyResponse);
    };

    let finish_reason = candidate.finish_reason.as_deref().map(map_finish_reason);

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        if finish_reason == Some(FinishReason::Safety) {
            return Err(LlmError::Blocked("SAFETY".to_string()));
        }
        return Err(LlmError::EmptyResponse);
    }

    Ok(GenerateResponse {
        text,
        finish_reason,
        usage,
    })
}

/// Convert a non-success HTTP response body into an error
pub fn from_error_body(status: u16, body: String) -> LlmError {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => {
            let detail = envelope.error;
            let code = detail
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| status.to_string());
            LlmError::ProviderError {
                code,
                message: detail.message,
            }
        }
        Err(_) => LlmError::HttpError { status, body },
    }
}

/// Convert a 429 response body into a rate-limit error
///
/// The provider's own message is kept; an unstructured body is kept verbatim.
pub fn from_rate_limit_body(body: String, retry_after: Option<Duration>) -> LlmError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .map(|envelope| envelope.error.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    LlmError::RateLimitExceeded {
        message,
        retry_after,
    }
}

fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        other => FinishReason::Other(other.to_string()),
    }
}
