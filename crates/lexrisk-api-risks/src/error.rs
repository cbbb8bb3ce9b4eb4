//! Error types for the risk register API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error type for risk and control operations.
///
/// A risk that exists but belongs to another user's register maps to
/// `NotFound`, the same status as a risk that does not exist, so existence is
/// never leaked through the status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiRisksError {
    /// Risk event not found or not owned by the caller.
    #[error("Risk not found")]
    RiskNotFound,

    /// Register not found or not owned by the caller.
    #[error("Register not found")]
    RegisterNotFound,

    /// Control not found or not owned by the caller.
    #[error("Control not found")]
    ControlNotFound,

    /// Referenced protocol not found.
    #[error("Protocol not found")]
    ProtocolNotFound,

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

impl IntoResponse for ApiRisksError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiRisksError::RiskNotFound => (StatusCode::NOT_FOUND, "Risk not found".to_string()),
            ApiRisksError::RegisterNotFound => {
                (StatusCode::NOT_FOUND, "Register not found".to_string())
            }
            ApiRisksError::ControlNotFound => {
                (StatusCode::NOT_FOUND, "Control not found".to_string())
            }
            ApiRisksError::ProtocolNotFound => {
                (StatusCode::NOT_FOUND, "Protocol not found".to_string())
            }
            ApiRisksError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiRisksError::Database(e) => {
                tracing::error!(error = ?e, "Database error in risk API");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
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
        assert_eq!(ApiRisksError::RiskNotFound.to_string(), "Risk not found");
        assert_eq!(
            ApiRisksError::Validation("probability must be between 1 and 5".to_string())
                .to_string(),
            "probability must be between 1 and 5"
        );
    }
}
