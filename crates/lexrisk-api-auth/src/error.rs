//! Error types for the signup API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error type for account creation.
#[derive(Debug, thiserror::Error)]
pub enum ApiAuthError {
    /// Input validation failure; the message names the violated constraint.
    #[error("{0}")]
    Validation(String),

    /// Email already registered.
    #[error("Email already registered")]
    DuplicateEmail,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// User-facing error body: a human-readable message, nothing more.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiAuthError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Duplicate email surfaces as 400, matching the published contract
            ApiAuthError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "Email already registered".to_string(),
            ),
            ApiAuthError::Database(e) => {
                tracing::error!(error = ?e, "Database error during signup");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
            ApiAuthError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error during signup");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
