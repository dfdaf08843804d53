pub mod auto_replies;
pub mod chat_summaries;
pub mod health;
pub mod root;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{"message": ...}` acknowledgement body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
