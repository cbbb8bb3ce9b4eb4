//! Request and response shapes for the signup API.

use lexrisk_db::User;
use lexrisk_domain::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// Display name.
    pub name: String,
    /// Email address.
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    /// Plaintext password; hashed before storage, never persisted or echoed.
    pub password: String,
}

/// The created identity. The password hash is never included.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Assigned role.
    pub role: UserRole,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Signup response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupResponse {
    /// The created user.
    pub user: UserResponse,
}
