//! Account creation service.

use crate::error::ApiAuthError;
use crate::models::{SignupRequest, UserResponse};
use lexrisk_auth::PasswordHasher;
use lexrisk_db::User;
use sqlx::PgPool;

/// Postgres unique-violation SQLSTATE code.
const UNIQUE_VIOLATION: &str = "23505";

/// Service for account creation.
#[derive(Clone)]
pub struct AccountService {
    pool: PgPool,
    password_hasher: PasswordHasher,
}

impl AccountService {
    /// Create a new account service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            password_hasher: PasswordHasher::default(),
        }
    }

    /// Create a user account with a hashed password and the default role.
    ///
    /// The request is assumed to be already validated by the handler. The
    /// email existence check and the insert are not atomic; a concurrent
    /// identical signup can slip between them and hit the unique constraint,
    /// which is mapped to the same duplicate-email error.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::DuplicateEmail` when the email is already registered.
    /// - `ApiAuthError::Internal` when password hashing fails.
    /// - `ApiAuthError::Database` on any other storage failure.
    pub async fn create_account(
        &self,
        request: &SignupRequest,
    ) -> Result<UserResponse, ApiAuthError> {
        let existing: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(&request.email)
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            return Err(ApiAuthError::DuplicateEmail);
        }

        let password_hash = self
            .password_hasher
            .hash(&request.password)
            .map_err(|e| ApiAuthError::Internal(e.to_string()))?;

        let user: User = sqlx::query_as(
            r"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING *
            ",
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Lost the race against a concurrent identical signup
            if let sqlx::Error::Database(ref db) = e {
                if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return ApiAuthError::DuplicateEmail;
                }
            }
            ApiAuthError::Database(e)
        })?;

        Ok(UserResponse::from(&user))
    }
}
