// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller-supplied body failed shape validation or carried nothing to apply.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any failure reported by the document store.
    #[error("Store failure: {0}")]
    StoreFailure(String),

    /// Store failure whose detail was already logged; carries only a
    /// generic message for the caller.
    #[error("Store failure: {0}")]
    RedactedStoreFailure(String),
}

impl AppError {
    /// Log the underlying detail and replace it with a generic message.
    pub fn redacted(self, generic: &str) -> Self {
        match self {
            AppError::StoreFailure(detail) => {
                tracing::error!(error = %detail, "{}", generic);
                AppError::RedactedStoreFailure(generic.to_string())
            }
            other => other,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
            AppError::StoreFailure(msg) => {
                tracing::error!(error = %msg, "Store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "store_failure", msg)
            }
            AppError::RedactedStoreFailure(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_failure", msg)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_replaces_store_detail() {
        let err = AppError::StoreFailure("denied".into()).redacted("Failed");
        assert!(matches!(err, AppError::RedactedStoreFailure(msg) if msg == "Failed"));
    }

    #[test]
    fn test_redacted_keeps_invalid_input() {
        let err = AppError::InvalidInput("empty".into()).redacted("Failed");
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "empty"));
    }

    #[test]
    fn test_redacted_maps_to_server_error() {
        let err = AppError::RedactedStoreFailure("Failed".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
