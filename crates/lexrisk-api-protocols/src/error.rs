//! Error types for the protocol library API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error type for protocol operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiProtocolsError {
    /// Protocol not found (or not public).
    #[error("Protocol not found")]
    NotFound,

    /// Input validation failure.
    #[error("{0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiProtocolsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiProtocolsError::NotFound => {
                (StatusCode::NOT_FOUND, "Protocol not found".to_string())
            }
            ApiProtocolsError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiProtocolsError::Database(e) => {
                tracing::error!(error = ?e, "Database error while retrieving protocols");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to retrieve protocols".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ApiProtocolsError::NotFound.to_string(), "Protocol not found");
        assert_eq!(
            ApiProtocolsError::Validation("bad filter".to_string()).to_string(),
            "bad filter"
        );
    }
}
