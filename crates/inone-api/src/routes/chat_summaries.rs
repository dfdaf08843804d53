use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use inone_llm::SummaryRequest;
use inone_persist::NewChatSummary;

use crate::{error::ApiResult, extract::ApiJson, state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatSummaryRequest {
    pub chat_id: String,
    pub user_id: String,
    /// Conversation text to summarize
    pub summary_text: String,
    /// Kept as given; extracted from the text when empty
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatSummaryResponse {
    pub id: String,
    pub summary_text: String,
}

/// Summarize a conversation and store the result
#[utoipa::path(
    post,
    path = "/chat-summary/",
    request_body = CreateChatSummaryRequest,
    responses(
        (status = 200, description = "Summary generated", body = CreateChatSummaryResponse),
        (status = 422, description = "Malformed payload", body = crate::routes::ErrorResponse),
        (status = 500, description = "Inference or storage failure", body = crate::routes::ErrorResponse)
    ),
    tag = "chat-summary"
)]
pub async fn create_chat_summary(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateChatSummaryRequest>,
) -> ApiResult<Json<CreateChatSummaryResponse>> {
    let inference = &state.config.inference;
    let request = SummaryRequest::new(req.summary_text.clone())
        .max_length(inference.summary_max_length)
        .min_length(inference.summary_min_length)
        .sample(false);

    let summary = state.summarizer.summarize(request).await?;

    let keywords = if req.keywords.is_empty() {
        state
            .keyword_extractor
            .extract(&req.summary_text, state.config.keywords.max_keywords)
    } else {
        req.keywords
    };

    let record = state
        .persist
        .save_chat_summary(
            NewChatSummary::new(req.chat_id, req.user_id, req.summary_text, summary)
                .with_keywords(keywords),
        )
        .await?;

    tracing::info!(
        summary_id = %record.id,
        chat_id = %record.chat_id,
        keywords = record.keywords.len(),
        "Chat summary stored"
    );

    Ok(Json(CreateChatSummaryResponse {
        id: record.id,
        summary_text: record.summary_text,
    }))
}
