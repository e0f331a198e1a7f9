//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use accrue_core::AccrueError;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed validation.
    #[error(transparent)]
    Validation(#[from] AccrueError),

    /// The body was not JSON, or not JSON of the expected shape.
    #[error("{0}")]
    InvalidBody(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("rejected request body: {}", rejection.body_text());
        match rejection {
            // Well-formed JSON of the wrong shape, e.g. an unknown `kind`
            JsonRejection::JsonDataError(e) => ApiError::InvalidBody(e.body_text()),
            _ => ApiError::InvalidBody("Request body must be JSON".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = ApiError::from(AccrueError::missing_field("principal"));
        assert_eq!(err.to_string(), "principal is required");
    }

    #[test]
    fn test_status_is_bad_request() {
        let response = ApiError::InvalidBody("Request body must be JSON".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
