//! Error types for lexrisk-auth.

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// The stored hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// The bearer token is missing, malformed, expired, or has a bad signature.
    #[error("Invalid or expired token")]
    InvalidToken,
}
