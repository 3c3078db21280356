//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Responses use the JSON envelope
//! `{"error": "..."}`, extended with `"details"` for validation failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::db::RepositoryError;
use crate::validate::FieldError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Bearer credential missing or rejected.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order or profile payload failed validation.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => {
                if err.is_credential_fault() {
                    StatusCode::UNAUTHORIZED
                } else {
                    // Key discovery failures are ours, not the caller's.
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // Don't expose internal error details to clients
        let body = match self {
            Self::Validation(details) => json!({
                "error": "Validation failed",
                "details": details,
            }),
            Self::NotFound(what) => json!({ "error": what }),
            Self::Auth(err) if err.is_credential_fault() => {
                json!({ "error": "Invalid token" })
            }
            Self::Database(_) | Self::Internal(_) | Self::Auth(_) => {
                json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    fn is_server_error(&self) -> bool {
        match self {
            Self::Database(_) | Self::Internal(_) => true,
            Self::Auth(err) => !err.is_credential_fault(),
            Self::Validation(_) | Self::NotFound(_) => false,
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
