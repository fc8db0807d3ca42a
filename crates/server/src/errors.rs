use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the HTTP layer, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path segment that is not an integer.
    #[error("invalid id")]
    InvalidId,
    /// Request body that could not be decoded into a payload.
    #[error("{0}")]
    InvalidBody(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Service(ServiceError::NotFound(_)) => "user not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, error = %self, "request rejected");
        (status, Json(serde_json::json!({"error": self.message()}))).into_response()
    }
}

/// Parse a path-embedded identifier before any store call.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::InvalidId)
}

/// Decode a JSON request body regardless of its `Content-Type`.
/// A `null` body decodes to the payload's zero value.
pub fn decode_input<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let input: Option<T> = serde_json::from_slice(body)?;
    Ok(input.unwrap_or_default())
}
