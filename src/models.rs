// Data structures (ConversationEntry, request and response bodies)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// One completed exchange in the conversation log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationEntry {
    pub id: u64,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

// Request Types
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub conversations_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub conversations: Vec<ConversationEntry>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub status: String,
    pub message: String,
}

// Error body; `status` is only present for generation failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialization() {
        let request: ChatRequest = serde_json::from_str(r#"{"message":"Hello"}"#).unwrap();
        assert_eq!(request.message.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_chat_request_missing_message() {
        let request: ChatRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(request.message.is_none());

        let request: ChatRequest = serde_json::from_str(r#"{"message":null}"#).unwrap();
        assert!(request.message.is_none());
    }

    #[test]
    fn test_conversation_entry_serialization() {
        let entry = ConversationEntry {
            id: 1,
            user_message: "Hello".to_string(),
            bot_response: "Hi there".to_string(),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["user_message"], "Hello");
        assert_eq!(value["bot_response"], "Hi there");

        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[test]
    fn test_error_response_omits_missing_status() {
        let body = ErrorResponse {
            error: "Message is required".to_string(),
            status: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"], "Message is required");
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_error_response_with_status() {
        let body = ErrorResponse {
            error: "Failed to generate response: boom".to_string(),
            status: Some("error".to_string()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["status"], "error");
    }
}
