use mongodb::{Database, Collection, bson::doc, bson::oid::ObjectId};
use futures::TryStreamExt;

use crate::dbs::mongo::models::MongoAutoReply;
use crate::error::Result;

const COLLECTION: &str = "auto_replies";

#[derive(Clone)]
pub struct MongoAutoReplyRepository {
    collection: Collection<MongoAutoReply>,
}

impl MongoAutoReplyRepository {
    pub fn new(database: &Database) -> Self {
        let collection = database.collection(COLLECTION);
        Self { collection }
    }

    /// Save a single auto-reply document
    pub async fn save(&self, reply: &MongoAutoReply) -> Result<ObjectId> {
        self.collection.insert_one(reply).await?;
        Ok(reply.id)
    }

    /// Get all auto-replies for a message
    pub async fn find_by_message_id(&self, message_id: &str) -> Result<Vec<MongoAutoReply>> {
        let filter = doc! { "messageId": message_id };
        let replies = self.collection
            .find(filter)
            .await?
            .try_collect()
            .await?;
        Ok(replies)
    }

    /// Delete one auto-reply by id
    pub async fn delete(&self, id: ObjectId) -> Result<u64> {
        let filter = doc! { "_id": id };
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }
}
