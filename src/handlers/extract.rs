use crate::{handlers::ApiError, models::Validate};
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body extractor that rejects malformed payloads as validation errors
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(ApiError::Validation)?;
        Ok(Self(value))
    }
}

/// The `{id}` segment of an item path
pub struct ItemId(pub u64);

impl ItemId {
    /// Integers that can never name a stored item are not found, anything
    /// else that is not a u64 is a validation error
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if let Ok(id) = raw.parse::<u64>() {
            return Ok(Self(id));
        }

        let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Err(ApiError::NotFound(format!("Item {} not found", raw)))
        } else {
            Err(ApiError::Validation(format!(
                "Invalid URL: Cannot parse `{}` as an integer item id",
                raw
            )))
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(raw: &str) -> Result<u64, StatusCode> {
        ItemId::parse(raw).map(|ItemId(id)| id).map_err(|e| e.status())
    }

    #[test]
    fn parses_unsigned_ids() {
        assert_eq!(status_of("7"), Ok(7));
        assert_eq!(status_of("+7"), Ok(7));
    }

    #[test]
    fn integers_outside_id_range_are_not_found() {
        assert_eq!(status_of("-1"), Err(StatusCode::NOT_FOUND));
        assert_eq!(status_of("99999999999999999999"), Err(StatusCode::NOT_FOUND));
    }

    #[test]
    fn non_integers_are_unprocessable() {
        assert_eq!(status_of("abc"), Err(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(status_of("1.5"), Err(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(status_of("-"), Err(StatusCode::UNPROCESSABLE_ENTITY));
    }
}
