//! Bearer-token claims and the authenticated-identity extension.

use chrono::Utc;
use lexrisk_core::UserId;
use lexrisk_domain::UserRole;
use serde::{Deserialize, Serialize};

/// Claims carried by a LexRisk bearer token.
///
/// Standard RFC 7519 claims plus the account email and role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthClaims {
    /// Subject: the user ID.
    pub sub: String,
    /// Account email.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

impl AuthClaims {
    /// Build claims for a user, expiring after `ttl_secs`.
    #[must_use]
    pub fn for_user(user_id: UserId, email: impl Into<String>, role: UserRole, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            email: email.into(),
            role,
            exp: now + ttl_secs,
            iat: now,
        }
    }

    /// Parse the subject claim as a [`UserId`].
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse().ok()
    }
}

/// The authenticated identity, injected into request extensions by the auth
/// middleware. Handlers receive it explicitly; no ambient session lookup.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user's ID.
    pub id: UserId,
    /// The authenticated user's email.
    pub email: String,
    /// The authenticated user's role.
    pub role: UserRole,
}
