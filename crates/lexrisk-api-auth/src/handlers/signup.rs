//! Self-service signup endpoint handler.
//!
//! POST /api/auth/signup - Create a new user account.

use crate::error::ApiAuthError;
use crate::models::{SignupRequest, SignupResponse};
use crate::services::AccountService;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Handle self-service signup.
///
/// Creates a new user account with the default CLIENT role. This endpoint
/// does not require authentication.
///
/// # Errors
///
/// - 400 Bad Request: missing field, invalid email, password under 6 characters,
///   or email already registered
/// - 500 Internal Server Error: unexpected failure
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Validation error or email already registered"),
        (status = 500, description = "Unexpected failure"),
    ),
    tag = "Auth"
)]
pub async fn signup_handler(
    Extension(account_service): Extension<Arc<AccountService>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiAuthError> {
    validate_signup(&request)?;

    let user = account_service.create_account(&request).await?;

    info!(user_id = %user.id, email = %user.email, "New account created");

    Ok((StatusCode::CREATED, Json(SignupResponse { user })))
}

/// Validate a signup request: all fields present, email well-formed, password
/// at least [`MIN_PASSWORD_LENGTH`] characters. The failure message names the
/// violated constraint.
pub fn validate_signup(request: &SignupRequest) -> Result<(), ApiAuthError> {
    if request.name.trim().is_empty() {
        return Err(ApiAuthError::Validation("name is required".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(ApiAuthError::Validation("email is required".to_string()));
    }
    if request.password.is_empty() {
        return Err(ApiAuthError::Validation("password is required".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiAuthError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    request.validate().map_err(|e| {
        let message = e
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(ToString::to_string))
            })
            .collect::<Vec<_>>()
            .join(", ");
        ApiAuthError::Validation(message)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_signup(&request("Ada", "ada@example.com", "secret1")).is_ok());
    }

    #[test]
    fn test_missing_name_fails() {
        let err = validate_signup(&request("", "ada@example.com", "secret1")).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_missing_email_fails() {
        let err = validate_signup(&request("Ada", "", "secret1")).unwrap_err();
        assert_eq!(err.to_string(), "email is required");
    }

    #[test]
    fn test_empty_password_fails() {
        let err = validate_signup(&request("Ada", "ada@example.com", "")).unwrap_err();
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn test_five_char_password_fails() {
        let err = validate_signup(&request("Ada", "ada@example.com", "12345")).unwrap_err();
        assert!(err.to_string().contains("at least 6 characters"));
    }

    #[test]
    fn test_six_char_password_passes() {
        assert!(validate_signup(&request("Ada", "ada@example.com", "123456")).is_ok());
    }

    #[test]
    fn test_malformed_email_fails() {
        let err = validate_signup(&request("Ada", "not-an-email", "secret1")).unwrap_err();
        assert!(matches!(err, ApiAuthError::Validation(_)));
    }
}
