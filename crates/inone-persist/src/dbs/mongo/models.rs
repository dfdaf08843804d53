use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::{AutoReply, ChatSummary, NewAutoReply, NewChatSummary};

/// MongoDB-specific auto-reply document (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoAutoReply {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: String,
    pub message_id: String,
    #[serde(default)]
    pub seed_text: String,
    #[serde(default)]
    pub suggested_replies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_reply: Option<String>,
    /// Documents written before timestamps existed read as the Unix epoch
    #[serde(default, with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// MongoDB-specific chat summary document (uses ObjectId)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MongoChatSummary {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub chat_id: String,
    pub user_id: String,
    #[serde(default)]
    pub source_text: String,
    pub summary_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<NewAutoReply> for MongoAutoReply {
    fn from(reply: NewAutoReply) -> Self {
        Self {
            id: ObjectId::new(),
            user_id: reply.user_id,
            message_id: reply.message_id,
            seed_text: reply.seed_text,
            suggested_replies: reply.suggested_replies,
            selected_reply: reply.selected_reply,
            created_at: reply.created_at,
        }
    }
}

impl From<MongoAutoReply> for AutoReply {
    fn from(reply: MongoAutoReply) -> Self {
        Self {
            id: reply.id.to_hex(),
            user_id: reply.user_id,
            message_id: reply.message_id,
            seed_text: reply.seed_text,
            suggested_replies: reply.suggested_replies,
            selected_reply: reply.selected_reply,
            created_at: reply.created_at,
        }
    }
}

impl From<NewChatSummary> for MongoChatSummary {
    fn from(summary: NewChatSummary) -> Self {
        Self {
            id: ObjectId::new(),
            chat_id: summary.chat_id,
            user_id: summary.user_id,
            source_text: summary.source_text,
            summary_text: summary.summary_text,
            keywords: summary.keywords,
            created_at: summary.created_at,
        }
    }
}

impl From<MongoChatSummary> for ChatSummary {
    fn from(summary: MongoChatSummary) -> Self {
        Self {
            id: summary.id.to_hex(),
            chat_id: summary.chat_id,
            user_id: summary.user_id,
            source_text: summary.source_text,
            summary_text: summary.summary_text,
            keywords: summary.keywords,
            created_at: summary.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_reply_document_layout() {
        let doc: MongoAutoReply =
            NewAutoReply::new("u1", "m1", "Hi there", vec!["one".into()]).into();
        let bson_doc = bson::to_document(&doc).unwrap();

        assert!(bson_doc.get_object_id("_id").is_ok());
        assert_eq!(bson_doc.get_str("messageId").unwrap(), "m1");
        assert!(bson_doc.get_datetime("createdAt").is_ok());
        assert!(!bson_doc.contains_key("selectedReply"));
    }

    #[test]
    fn test_object_id_becomes_hex_string() {
        let doc: MongoChatSummary = NewChatSummary::new("c1", "u1", "text", "summary").into();
        let hex = doc.id.to_hex();
        let record: ChatSummary = doc.into();

        assert_eq!(record.id, hex);
        assert_eq!(record.summary_text, "summary");
    }

    #[test]
    fn test_reads_auto_reply_without_seed_or_timestamp() {
        let id = ObjectId::new();
        let legacy = bson::doc! {
            "_id": id,
            "userId": "u1",
            "messageId": "m1",
            "suggestedReplies": ["a", "b", "c"],
            "selectedReply": bson::Bson::Null,
        };

        let doc: MongoAutoReply = bson::from_document(legacy).unwrap();
        let record: AutoReply = doc.into();

        assert_eq!(record.id, id.to_hex());
        assert_eq!(record.seed_text, "");
        assert_eq!(record.suggested_replies, vec!["a", "b", "c"]);
        assert_eq!(record.selected_reply, None);
        assert_eq!(record.created_at, DateTime::<Utc>::default());
    }

    #[test]
    fn test_reads_chat_summary_without_source_or_timestamp() {
        let legacy = bson::doc! {
            "_id": ObjectId::new(),
            "chatId": "c1",
            "userId": "u1",
            "summaryText": "short summary",
            "keywords": [],
        };

        let doc: MongoChatSummary = bson::from_document(legacy).unwrap();
        let record: ChatSummary = doc.into();

        assert_eq!(record.source_text, "");
        assert_eq!(record.summary_text, "short summary");
        assert!(record.keywords.is_empty());
        assert_eq!(record.created_at, DateTime::<Utc>::default());
    }
}
