//! LexRisk authentication support.
//!
//! Password hashing (Argon2id), bearer-token validation, and the axum
//! middleware that turns a valid token into an [`AuthUser`] request
//! extension. Token issuance is handled outside this service; this crate
//! only validates.

pub mod claims;
pub mod error;
pub mod middleware;
pub mod password;

pub use claims::{AuthClaims, AuthUser};
pub use error::AuthError;
pub use middleware::{auth_middleware, JwtValidator};
pub use password::PasswordHasher;
