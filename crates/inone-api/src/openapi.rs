use utoipa::OpenApi;

use crate::routes::{
    auto_replies::{self, AutoReplyResponse, CreateAutoReplyRequest, CreateAutoReplyResponse},
    chat_summaries::{self, CreateChatSummaryRequest, CreateChatSummaryResponse},
    health::{self, HealthResponse},
    root, ErrorResponse, MessageResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "In-One API",
        description = "Reply suggestions and chat summaries backed by text-generation models"
    ),
    paths(
        root::read_root,
        health::health_check,
        auto_replies::create_auto_reply,
        auto_replies::list_auto_replies,
        auto_replies::delete_auto_reply,
        chat_summaries::create_chat_summary,
    ),
    components(schemas(
        MessageResponse,
        ErrorResponse,
        HealthResponse,
        CreateAutoReplyRequest,
        CreateAutoReplyResponse,
        AutoReplyResponse,
        CreateChatSummaryRequest,
        CreateChatSummaryResponse,
    )),
    tags(
        (name = "root", description = "Welcome message"),
        (name = "health", description = "Service health"),
        (name = "auto-replies", description = "Generated reply suggestions"),
        (name = "chat-summary", description = "Conversation summaries")
    )
)]
pub struct ApiDoc;
