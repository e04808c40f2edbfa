use axum::Json;
use crate::models::MessageResponse;

/// Static welcome payload
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the item store API".to_string(),
    })
}
