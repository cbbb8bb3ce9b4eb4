//! Password hashing with Argon2id.
//!
//! Secure password hashing and verification using Argon2id with
//! OWASP-recommended parameters.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher configuration.
///
/// Uses OWASP-recommended parameters for Argon2id:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. These are hardcoded constants that are
        // always valid; failure would indicate a bug in the argon2 crate.
        let params = Params::new(19456, 2, 1, None)
            .expect("OWASP Argon2 parameters are valid constants");

        Self { params }
    }

    /// Hash a password using Argon2id.
    ///
    /// Returns a PHC-formatted hash string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a PHC-formatted hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if the hash cannot be parsed.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::HashingFailed(format!("Verification failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_produces_phc_string() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correct horse battery").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_accepts_correct_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret-pass").unwrap();
        assert!(hasher.verify("s3cret-pass", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret-pass").unwrap();
        assert!(!hasher.verify("wrong-pass", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let hasher = PasswordHasher::new();
        let err = hasher.verify("anything", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::InvalidHashFormat));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let h1 = hasher.hash("same-password").unwrap();
        let h2 = hasher.hash("same-password").unwrap();
        assert_ne!(h1, h2);
    }
}
