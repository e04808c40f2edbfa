use axum::{extract::State, Json};
use crate::{handlers::ApiError, models::{HealthResponse, ReadyResponse}, store::SharedStore};
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
    })
}

/// Readiness check endpoint, fails while the store is unusable
pub async fn ready_check(State(store): State<SharedStore>) -> Result<Json<ReadyResponse>, ApiError> {
    debug!("Readiness check requested");
    let items = store.len()?;
    Ok(Json(ReadyResponse {
        status: "ok".to_string(),
        message: "Service is ready".to_string(),
        items,
    }))
}
