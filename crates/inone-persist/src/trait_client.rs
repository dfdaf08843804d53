use async_trait::async_trait;
use crate::models::{AutoReply, ChatSummary, NewAutoReply, NewChatSummary};
use crate::error::Result;

/// Trait for document-store persistence operations
///
/// Implementations own identifier assignment. Identifiers cross this boundary
/// as opaque strings.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Insert an auto-reply record and return it with its assigned id
    async fn save_auto_reply(&self, reply: NewAutoReply) -> Result<AutoReply>;

    /// All auto-reply records for a message, in no particular order
    async fn get_auto_replies(&self, message_id: &str) -> Result<Vec<AutoReply>>;

    /// Delete at most one auto-reply by id; returns the number removed (0 or 1)
    async fn delete_auto_reply(&self, reply_id: &str) -> Result<u64>;

    /// Insert a chat summary record and return it with its assigned id
    async fn save_chat_summary(&self, summary: NewChatSummary) -> Result<ChatSummary>;

    /// Cheap connectivity check
    async fn ping(&self) -> Result<()>;
}
