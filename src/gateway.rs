//! The chat gateway service: validation, provider call, conversation log

use chrono::Utc;
use std::sync::Arc;

use crate::error::GatewayError;
use crate::history::{ConversationLog, HISTORY_PAGE_SIZE};
use crate::llm::{GenerateRequest, GenerationConfig, LlmProvider};
use crate::models::{ChatResponse, ClearHistoryResponse, HealthResponse, HistoryResponse};

/// Characters of the generated response included in the info log line
const LOG_PREVIEW_CHARS: usize = 100;

/// Shared application state handed to every request handler
///
/// Cloning shares the provider and the conversation log.
#[derive(Clone)]
pub struct Gateway {
    provider: Arc<dyn LlmProvider>,
    generation: GenerationConfig,
    log: ConversationLog,
}

impl Gateway {
    pub fn new(provider: Arc<dyn LlmProvider>, generation: GenerationConfig) -> Self {
        Self {
            provider,
            generation,
            log: ConversationLog::new(),
        }
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Forward one message to the provider and record the exchange
    ///
    /// Nothing is appended unless the provider call succeeds.
    pub async fn submit_message(&self, message: Option<&str>) -> Result<ChatResponse, GatewayError> {
        let user_message = message.map(str::trim).unwrap_or_default();
        if user_message.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "Message is required".to_string(),
            ));
        }

        tracing::info!(user_message = %user_message, "Received message");

        let request = GenerateRequest::prompt(user_message, self.generation.clone());
        let generated = self.provider.generate(request).await.map_err(|e| {
            tracing::error!(error = %e, "Error in chat endpoint");
            GatewayError::GenerationFailure(e)
        })?;

        let bot_response = generated.text.trim();
        let entry = self.log.append(user_message, bot_response).await;

        let preview: String = bot_response.chars().take(LOG_PREVIEW_CHARS).collect();
        tracing::info!(
            conversation_id = entry.id,
            "Generated response: {}...",
            preview
        );

        Ok(ChatResponse {
            response: entry.bot_response,
            status: "success".to_string(),
            timestamp: entry.timestamp,
        })
    }

    pub async fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            conversations_count: self.log.len().await,
        }
    }

    /// The most recent exchanges, oldest first, and the total logged
    pub async fn history(&self) -> HistoryResponse {
        let (conversations, total) = self.log.page(HISTORY_PAGE_SIZE).await;
        HistoryResponse {
            conversations,
            total,
        }
    }

    pub async fn clear_history(&self) -> ClearHistoryResponse {
        self.log.clear().await;
        tracing::info!("Conversation history cleared");

        ClearHistoryResponse {
            status: "success".to_string(),
            message: "History cleared".to_string(),
        }
    }
}
