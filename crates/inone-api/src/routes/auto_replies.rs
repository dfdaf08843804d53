use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use inone_llm::GenerationRequest;
use inone_persist::{AutoReply, NewAutoReply};

use super::MessageResponse;
use crate::{
    error::{ApiError, ApiResult},
    extract::ApiJson,
    state::AppState,
};

/// Number of suggestions generated per request
pub const SUGGESTION_COUNT: u32 = 3;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutoReplyRequest {
    pub user_id: String,
    pub message_id: String,
    /// Legacy seed carrier; only the first entry is read
    #[serde(default)]
    pub suggested_replies: Vec<String>,
    /// Prompt for generation; wins over `suggestedReplies[0]`
    #[serde(default)]
    pub seed_text: Option<String>,
    #[serde(default)]
    pub selected_reply: Option<String>,
}

impl CreateAutoReplyRequest {
    /// First non-blank seed, preferring `seedText`
    pub fn seed(&self) -> Option<&str> {
        let non_blank = |s: &&str| !s.trim().is_empty();

        self.seed_text
            .as_deref()
            .filter(non_blank)
            .or_else(|| {
                self.suggested_replies
                    .first()
                    .map(String::as_str)
                    .filter(non_blank)
            })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAutoReplyResponse {
    pub id: String,
    pub suggested_replies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoReplyResponse {
    pub id: String,
    pub user_id: String,
    pub message_id: String,
    pub seed_text: String,
    pub suggested_replies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_reply: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Generate and store reply suggestions for a message
#[utoipa::path(
    post,
    path = "/auto-replies/",
    request_body = CreateAutoReplyRequest,
    responses(
        (status = 200, description = "Suggestions generated", body = CreateAutoReplyResponse),
        (status = 422, description = "Missing seed text or malformed payload", body = crate::routes::ErrorResponse),
        (status = 500, description = "Inference or storage failure", body = crate::routes::ErrorResponse)
    ),
    tag = "auto-replies"
)]
pub async fn create_auto_reply(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateAutoReplyRequest>,
) -> ApiResult<Json<CreateAutoReplyResponse>> {
    let seed = req
        .seed()
        .ok_or_else(|| {
            ApiError::Validation(
                "suggestedReplies must contain at least one non-empty seed text".to_string(),
            )
        })?
        .to_string();

    let request = GenerationRequest::new(seed.clone())
        .max_length(state.config.inference.reply_max_length)
        .num_sequences(SUGGESTION_COUNT);

    let replies = state.generator.generate(request).await?;
    if replies.len() != SUGGESTION_COUNT as usize {
        return Err(ApiError::Inference(anyhow::anyhow!(
            "expected {} generated replies, got {}",
            SUGGESTION_COUNT,
            replies.len()
        )));
    }

    let record = state
        .persist
        .save_auto_reply(
            NewAutoReply::new(req.user_id, req.message_id, seed, replies)
                .with_selected_reply(req.selected_reply),
        )
        .await?;

    tracing::info!(
        reply_id = %record.id,
        message_id = %record.message_id,
        "Auto-reply suggestions stored"
    );

    Ok(Json(CreateAutoReplyResponse {
        id: record.id,
        suggested_replies: record.suggested_replies,
    }))
}

/// List stored suggestions for a message
#[utoipa::path(
    get,
    path = "/auto-replies/{message_id}",
    params(
        ("message_id" = String, Path, description = "Message the suggestions were generated for")
    ),
    responses(
        (status = 200, description = "Stored suggestions, possibly empty", body = [AutoReplyResponse]),
        (status = 500, description = "Storage failure", body = crate::routes::ErrorResponse)
    ),
    tag = "auto-replies"
)]
pub async fn list_auto_replies(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<String>,
) -> ApiResult<Json<Vec<AutoReplyResponse>>> {
    let records = state.persist.get_auto_replies(&message_id).await?;

    tracing::debug!(%message_id, count = records.len(), "Fetched auto-replies");

    Ok(Json(records.into_iter().map(auto_reply_to_response).collect()))
}

/// Delete one stored suggestion record
#[utoipa::path(
    delete,
    path = "/auto-replies/{reply_id}",
    params(
        ("reply_id" = String, Path, description = "Id returned when the suggestions were created")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageResponse),
        (status = 404, description = "Reply not found", body = crate::routes::ErrorResponse)
    ),
    tag = "auto-replies"
)]
pub async fn delete_auto_reply(
    State(state): State<Arc<AppState>>,
    Path(reply_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = state.persist.delete_auto_reply(&reply_id).await?;
    if deleted == 0 {
        return Err(ApiError::ReplyNotFound(reply_id));
    }

    tracing::info!(%reply_id, "Auto-reply deleted");

    Ok(Json(MessageResponse::new("Deleted successfully")))
}

fn auto_reply_to_response(record: AutoReply) -> AutoReplyResponse {
    AutoReplyResponse {
        id: record.id,
        user_id: record.user_id,
        message_id: record.message_id,
        seed_text: record.seed_text,
        suggested_replies: record.suggested_replies,
        selected_reply: record.selected_reply,
        created_at: record.created_at,
    }
}
