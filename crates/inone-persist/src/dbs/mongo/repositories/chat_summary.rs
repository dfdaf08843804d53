use mongodb::{Database, Collection, bson::oid::ObjectId};

use crate::dbs::mongo::models::MongoChatSummary;
use crate::error::Result;

const COLLECTION: &str = "chat_summaries";

#[derive(Clone)]
pub struct MongoChatSummaryRepository {
    collection: Collection<MongoChatSummary>,
}

impl MongoChatSummaryRepository {
    pub fn new(database: &Database) -> Self {
        let collection = database.collection(COLLECTION);
        Self { collection }
    }

    /// Save a single chat summary document
    pub async fn save(&self, summary: &MongoChatSummary) -> Result<ObjectId> {
        self.collection.insert_one(summary).await?;
        Ok(summary.id)
    }
}
