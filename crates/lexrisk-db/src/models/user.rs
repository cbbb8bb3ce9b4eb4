//! User account model.

use chrono::{DateTime, Utc};
use lexrisk_domain::UserRole;
use sqlx::FromRow;
use uuid::Uuid;

/// A user account.
///
/// The password hash is deliberately not `Serialize`; response shapes in the
/// API crates copy the fields they expose.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,

    /// Display name.
    pub name: String,

    /// Email address (globally unique).
    pub email: String,

    /// Argon2id password hash in PHC string format.
    pub password_hash: String,

    /// Assigned role.
    pub role: UserRole,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
