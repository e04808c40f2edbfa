use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static greeting returned from the root path
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
