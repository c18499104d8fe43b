//! Error types for the code tracker.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use requests_store::StoreError;
use serde::Serialize;
use thiserror::Error;

/// Tracker error types.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Malformed mobile number or code, or a missing field.
    #[error("{0}")]
    Validation(String),

    /// Store or admin secret not configured.
    #[error("{0}")]
    Configuration(String),

    #[error("Invalid password")]
    InvalidPassword,

    /// The store rejected or failed an operation.
    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl TrackerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            TrackerError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            TrackerError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
            }
            TrackerError::InvalidPassword => (StatusCode::UNAUTHORIZED, "INVALID_PASSWORD"),
            TrackerError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
            TrackerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for TrackerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotInitialized => TrackerError::Configuration(e.to_string()),
            other => TrackerError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping() {
        let err: TrackerError = StoreError::NotInitialized.into();
        assert!(matches!(err, TrackerError::Configuration(_)));
        assert_eq!(err.to_string(), "Store not initialized");

        let err: TrackerError = StoreError::Api {
            status: 409,
            code: Some("23505".into()),
            message: "duplicate key".into(),
        }
        .into();
        assert!(matches!(err, TrackerError::Store(ref m) if m == "duplicate key"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            TrackerError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TrackerError::InvalidPassword.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            TrackerError::Configuration("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            TrackerError::Store("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
