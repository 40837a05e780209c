//! Shared fixtures for the HTTP tests

use async_trait::async_trait;
use chat_gateway::gateway::Gateway;
use chat_gateway::llm::{GenerateRequest, GenerateResponse, GenerationConfig, LlmError, LlmProvider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// In-memory provider: plays back scripted replies, then echoes prompts
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        let replies = replies
            .into_iter()
            .map(|r| r.map(str::to_string).map_err(str::to_string))
            .collect();
        Arc::new(Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn echo() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every prompt the gateway sent, in order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let prompt = request.prompt;
        self.prompts.lock().unwrap().push(prompt.clone());

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(GenerateResponse {
                text,
                finish_reason: None,
                usage: None,
            }),
            Some(Err(message)) => Err(LlmError::ProviderError {
                code: "UNAVAILABLE".to_string(),
                message,
            }),
            None => Ok(GenerateResponse {
                text: format!("reply to {}", prompt),
                finish_reason: None,
                usage: None,
            }),
        }
    }
}

pub fn gateway_with(provider: Arc<ScriptedProvider>) -> Gateway {
    Gateway::new(provider, GenerationConfig::default())
}
