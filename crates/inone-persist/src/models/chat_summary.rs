use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Database-agnostic chat summary record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummary {
    pub id: String,
    pub chat_id: String,
    pub user_id: String,
    /// Conversation text that was summarized
    pub source_text: String,
    pub summary_text: String,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Chat summary record before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatSummary {
    pub chat_id: String,
    pub user_id: String,
    pub source_text: String,
    pub summary_text: String,
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl NewChatSummary {
    pub fn new(
        chat_id: impl Into<String>,
        user_id: impl Into<String>,
        source_text: impl Into<String>,
        summary_text: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id: user_id.into(),
            source_text: source_text.into(),
            summary_text: summary_text.into(),
            keywords: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn into_record(self, id: impl Into<String>) -> ChatSummary {
        ChatSummary {
            id: id.into(),
            chat_id: self.chat_id,
            user_id: self.user_id,
            source_text: self.source_text,
            summary_text: self.summary_text,
            keywords: self.keywords,
            created_at: self.created_at,
        }
    }
}
