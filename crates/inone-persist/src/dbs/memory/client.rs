use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::trait_client::PersistenceClient;
use crate::models::{AutoReply, ChatSummary, NewAutoReply, NewChatSummary};
use crate::error::Result;

/// Process-local store with the same contract as the MongoDB client
///
/// Ids are UUID v4 strings. Used for local runs without a database and in tests.
#[derive(Default)]
pub struct InMemoryPersistenceClient {
    auto_replies: RwLock<Vec<AutoReply>>,
    chat_summaries: RwLock<Vec<ChatSummary>>,
}

impl InMemoryPersistenceClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored auto-reply
    pub async fn auto_replies(&self) -> Vec<AutoReply> {
        self.auto_replies.read().await.clone()
    }

    /// Snapshot of every stored chat summary
    pub async fn chat_summaries(&self) -> Vec<ChatSummary> {
        self.chat_summaries.read().await.clone()
    }
}

#[async_trait]
impl PersistenceClient for InMemoryPersistenceClient {
    async fn save_auto_reply(&self, reply: NewAutoReply) -> Result<AutoReply> {
        let record = reply.into_record(uuid::Uuid::new_v4().to_string());
        self.auto_replies.write().await.push(record.clone());
        Ok(record)
    }

    async fn get_auto_replies(&self, message_id: &str) -> Result<Vec<AutoReply>> {
        let replies = self.auto_replies.read().await;
        Ok(replies
            .iter()
            .filter(|r| r.message_id == message_id)
            .cloned()
            .collect())
    }

    async fn delete_auto_reply(&self, reply_id: &str) -> Result<u64> {
        let mut replies = self.auto_replies.write().await;
        match replies.iter().position(|r| r.id == reply_id) {
            Some(idx) => {
                replies.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn save_chat_summary(&self, summary: NewChatSummary) -> Result<ChatSummary> {
        let record = summary.into_record(uuid::Uuid::new_v4().to_string());
        self.chat_summaries.write().await.push(record.clone());
        Ok(record)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
