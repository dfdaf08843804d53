mod auto_reply;
mod chat_summary;

// Export database-agnostic models
pub use auto_reply::{AutoReply, NewAutoReply};
pub use chat_summary::{ChatSummary, NewChatSummary};
