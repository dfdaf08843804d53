use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Database-agnostic auto-reply record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoReply {
    pub id: String,
    pub user_id: String,
    pub message_id: String,
    /// Prompt the suggestions were generated from
    pub seed_text: String,
    pub suggested_replies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Auto-reply record before the store assigns an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewAutoReply {
    pub user_id: String,
    pub message_id: String,
    pub seed_text: String,
    pub suggested_replies: Vec<String>,
    pub selected_reply: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewAutoReply {
    pub fn new(
        user_id: impl Into<String>,
        message_id: impl Into<String>,
        seed_text: impl Into<String>,
        suggested_replies: Vec<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            message_id: message_id.into(),
            seed_text: seed_text.into(),
            suggested_replies,
            selected_reply: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_selected_reply(mut self, selected: Option<String>) -> Self {
        self.selected_reply = selected;
        self
    }

    pub fn into_record(self, id: impl Into<String>) -> AutoReply {
        AutoReply {
            id: id.into(),
            user_id: self.user_id,
            message_id: self.message_id,
            seed_text: self.seed_text,
            suggested_replies: self.suggested_replies,
            selected_reply: self.selected_reply,
            created_at: self.created_at,
        }
    }
}
