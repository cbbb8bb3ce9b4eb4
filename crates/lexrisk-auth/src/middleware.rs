//! Bearer-token authentication middleware.
//!
//! Extracts the `Authorization: Bearer` token, validates it, and inserts an
//! [`AuthUser`] into the request extensions for downstream handlers.

use crate::claims::{AuthClaims, AuthUser};
use crate::error::AuthError;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

/// HS256 token validator, shared via request extensions.
#[derive(Clone)]
pub struct JwtValidator {
    secret: Vec<u8>,
}

impl JwtValidator {
    /// Create a validator from the shared signing secret.
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: secret.to_vec(),
        }
    }

    /// Decode and validate a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` for any signature, format, or
    /// expiry failure.
    pub fn decode(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let validation = Validation::default();
        decode::<AuthClaims>(token, &DecodingKey::from_secret(&self.secret), &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Sign claims into a token. Issuance lives outside this service; this
    /// exists for integration-test fixtures.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidToken` if encoding fails.
    pub fn sign_for_tests(&self, claims: &AuthClaims) -> Result<String, AuthError> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|_| AuthError::InvalidToken)
    }
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "message": message })),
    )
        .into_response()
}

/// Authentication middleware.
///
/// 1. Reads the Bearer token from the Authorization header.
/// 2. Validates it against the [`JwtValidator`] in the extensions.
/// 3. Inserts an [`AuthUser`] into the request extensions.
///
/// Responds 401 with a `{"message": ...}` body on any failure.
pub async fn auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let validator = request
        .extensions()
        .get::<JwtValidator>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("JwtValidator not configured on the router");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "Server configuration error" })),
            )
                .into_response()
        })?;

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| unauthorized("Authentication required"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization header format"))?;

    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err(unauthorized("Authentication required"));
    }

    let claims = validator.decode(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| unauthorized("Invalid or expired token"))?;

    request.extensions_mut().insert(AuthUser {
        id: user_id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexrisk_core::UserId;
    use lexrisk_domain::UserRole;

    #[test]
    fn test_roundtrip_sign_and_decode() {
        let validator = JwtValidator::new(b"test-secret-test-secret-test-secret!");
        let id = UserId::new();
        let claims = AuthClaims::for_user(id, "u@example.com", UserRole::Client, 3600);
        let token = validator.sign_for_tests(&claims).unwrap();

        let decoded = validator.decode(&token).unwrap();
        assert_eq!(decoded.user_id(), Some(id));
        assert_eq!(decoded.email, "u@example.com");
        assert_eq!(decoded.role, UserRole::Client);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let signer = JwtValidator::new(b"secret-a-secret-a-secret-a-secret-a!");
        let validator = JwtValidator::new(b"secret-b-secret-b-secret-b-secret-b!");
        let claims = AuthClaims::for_user(UserId::new(), "u@example.com", UserRole::Client, 3600);
        let token = signer.sign_for_tests(&claims).unwrap();

        assert!(matches!(
            validator.decode(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let validator = JwtValidator::new(b"test-secret-test-secret-test-secret!");
        // Expired well past the default leeway
        let claims = AuthClaims::for_user(UserId::new(), "u@example.com", UserRole::Client, -600);
        let token = validator.sign_for_tests(&claims).unwrap();

        assert!(matches!(
            validator.decode(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let validator = JwtValidator::new(b"test-secret-test-secret-test-secret!");
        assert!(matches!(
            validator.decode("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
    }
}
