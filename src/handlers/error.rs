use crate::{models::ErrorResponse, store::StoreError};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

/// Failure outcome of a request handler
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// Malformed body or path parameter
    Validation(String),
    /// Request rejected before validation, e.g. an oversized body
    Rejected(StatusCode, String),
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected(status, _) => *status,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::NotFound(message)
            | ApiError::Validation(message)
            | ApiError::Rejected(_, message) => message,
            ApiError::Internal => "Internal server error".to_string(),
        };
        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound(e.to_string()),
            StoreError::Unavailable => {
                error!("Store error: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        debug!("Rejected request body: {}", message);
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => ApiError::Validation(message),
            other => ApiError::Rejected(other.status(), message),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => ApiError::Validation(message),
            _ => {
                error!("Path extraction failed: {}", message);
                ApiError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_status_codes() {
        assert_eq!(ApiError::from(StoreError::NotFound(3)).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(StoreError::Unavailable).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_message_names_the_id() {
        match ApiError::from(StoreError::NotFound(42)) {
            ApiError::NotFound(message) => assert_eq!(message, "Item 42 not found"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
