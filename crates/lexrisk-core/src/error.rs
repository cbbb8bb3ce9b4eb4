//! Standardized error type shared across the workspace.
//!
//! API crates define their own error enums that implement `IntoResponse`;
//! this type covers the common cases that cross crate boundaries.

use serde::Serialize;
use thiserror::Error;

/// Standardized error type for LexRisk.
///
/// # Variants
///
/// - `Unauthorized` - Missing or invalid session (HTTP 401)
/// - `NotFound` - Resource absent or not owned by the caller (HTTP 404)
/// - `Validation` - Input validation failure (HTTP 400)
/// - `Conflict` - Duplicate unique field (surfaced as HTTP 400)
#[derive(Debug, Clone, Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LexRiskError {
    /// Authentication failure.
    #[error("Unauthorized{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    Unauthorized {
        /// Optional message providing more context.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// Requested resource was not found (or belongs to another user).
    #[error("{resource} not found{}", id.as_ref().map(|i| format!(": {i}")).unwrap_or_default())]
    NotFound {
        /// The type of resource that was not found (e.g., "RiskEvent").
        resource: String,
        /// Optional identifier of the resource.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },

    /// Input validation failure.
    #[error("Validation error on field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// Description of the validation failure.
        message: String,
    },

    /// Duplicate unique field.
    #[error("Conflict: {message}")]
    Conflict {
        /// Description of the conflicting field.
        message: String,
    },
}

/// Type alias for Results using `LexRiskError`.
pub type Result<T> = std::result::Result<T, LexRiskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_display() {
        let err = LexRiskError::Unauthorized { message: None };
        assert_eq!(err.to_string(), "Unauthorized");

        let err = LexRiskError::Unauthorized {
            message: Some("Invalid token".to_string()),
        };
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }

    #[test]
    fn test_not_found_display() {
        let err = LexRiskError::NotFound {
            resource: "RiskEvent".to_string(),
            id: None,
        };
        assert_eq!(err.to_string(), "RiskEvent not found");

        let err = LexRiskError::NotFound {
            resource: "Protocol".to_string(),
            id: Some("abc-123".to_string()),
        };
        assert_eq!(err.to_string(), "Protocol not found: abc-123");
    }

    #[test]
    fn test_validation_display() {
        let err = LexRiskError::Validation {
            field: "password".to_string(),
            message: "too short".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Validation error on field 'password': too short"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err = LexRiskError::Conflict {
            message: "email already registered".to_string(),
        };
        let _: &dyn std::error::Error = &err;
    }
}
