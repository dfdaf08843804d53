use axum::Json;

use super::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Hello, Welcome to In-One!";

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    ),
    tag = "root"
)]
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
