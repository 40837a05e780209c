//! In-process conversation log

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::ConversationEntry;

/// Number of entries returned by the history endpoint
pub const HISTORY_PAGE_SIZE: usize = 10;

/// Ordered, append-only log of completed exchanges
///
/// Cloning is cheap and every clone shares the same entries. Ids are assigned
/// under the write lock, so they always run `1..=len` in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    entries: Arc<RwLock<Vec<ConversationEntry>>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exchange, stamping it with the next id and the current time
    pub async fn append(
        &self,
        user_message: impl Into<String>,
        bot_response: impl Into<String>,
    ) -> ConversationEntry {
        let mut entries = self.entries.write().await;
        let entry = ConversationEntry {
            id: entries.len() as u64 + 1,
            user_message: user_message.into(),
            bot_response: bot_response.into(),
            timestamp: Utc::now(),
        };
        entries.push(entry.clone());
        entry
    }

    /// The last `limit` entries, oldest first, with the total count read under the same lock
    pub async fn page(&self, limit: usize) -> (Vec<ConversationEntry>, usize) {
        let entries = self.entries.read().await;
        let start = entries.len().saturating_sub(limit);
        (entries[start..].to_vec(), entries.len())
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
