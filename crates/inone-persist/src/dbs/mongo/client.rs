use mongodb::{Client, Database, bson::doc, bson::oid::ObjectId};
use async_trait::async_trait;

use crate::trait_client::PersistenceClient;
use crate::models::{AutoReply, ChatSummary, NewAutoReply, NewChatSummary};
use crate::dbs::mongo::models::{MongoAutoReply, MongoChatSummary};
use crate::dbs::mongo::repositories::{MongoAutoReplyRepository, MongoChatSummaryRepository};
use crate::error::{Result, PersistError};

pub struct MongoPersistenceClient {
    database: Database,
    auto_reply_repo: MongoAutoReplyRepository,
    chat_summary_repo: MongoChatSummaryRepository,
}

impl MongoPersistenceClient {
    /// Connect to MongoDB and create client
    ///
    /// The database named in the URI path wins; `fallback_database` is used
    /// when the URI has none.
    pub async fn connect(mongodb_uri: &str, fallback_database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_database));

        tracing::debug!(database = %database.name(), "Using MongoDB database");

        Ok(Self::with_database(database))
    }

    pub fn with_database(database: Database) -> Self {
        Self {
            auto_reply_repo: MongoAutoReplyRepository::new(&database),
            chat_summary_repo: MongoChatSummaryRepository::new(&database),
            database,
        }
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl PersistenceClient for MongoPersistenceClient {
    async fn save_auto_reply(&self, reply: NewAutoReply) -> Result<AutoReply> {
        let document: MongoAutoReply = reply.into();
        self.auto_reply_repo.save(&document).await?;
        Ok(document.into())
    }

    async fn get_auto_replies(&self, message_id: &str) -> Result<Vec<AutoReply>> {
        let documents = self.auto_reply_repo.find_by_message_id(message_id).await?;
        Ok(documents.into_iter().map(|d| d.into()).collect())
    }

    async fn delete_auto_reply(&self, reply_id: &str) -> Result<u64> {
        // Ids are ObjectIds here; anything else cannot match a stored record.
        let Ok(object_id) = ObjectId::parse_str(reply_id) else {
            tracing::debug!(reply_id, "Delete requested for non-ObjectId reply id");
            return Ok(0);
        };

        self.auto_reply_repo.delete(object_id).await
    }

    async fn save_chat_summary(&self, summary: NewChatSummary) -> Result<ChatSummary> {
        let document: MongoChatSummary = summary.into();
        self.chat_summary_repo.save(&document).await?;
        Ok(document.into())
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The driver connects lazily, so no server is needed for these.
    const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:1/in-one";

    #[tokio::test]
    async fn test_database_name_comes_from_uri_path() {
        let client = MongoPersistenceClient::connect(UNREACHABLE_URI, "fallback")
            .await
            .unwrap();

        assert_eq!(client.database_name(), "in-one");
    }

    #[tokio::test]
    async fn test_fallback_database_when_uri_has_none() {
        let client = MongoPersistenceClient::connect("mongodb://127.0.0.1:1", "in-one-test")
            .await
            .unwrap();

        assert_eq!(client.database_name(), "in-one-test");
    }

    #[tokio::test]
    async fn test_delete_with_non_object_id_matches_nothing() {
        let client = MongoPersistenceClient::connect(UNREACHABLE_URI, "in-one")
            .await
            .unwrap();

        assert_eq!(client.delete_auto_reply("not-hex").await.unwrap(), 0);
        assert_eq!(client.delete_auto_reply("").await.unwrap(), 0);
    }
}
