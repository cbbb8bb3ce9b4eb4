//! Signup API router configuration.

use crate::handlers::signup_handler;
use crate::services::AccountService;
use axum::{routing::post, Extension, Router};
use sqlx::PgPool;
use std::sync::Arc;

/// Create the auth router.
///
/// # Endpoints
///
/// - `POST /api/auth/signup` - Create a new account (no authentication required)
pub fn auth_router(pool: PgPool) -> Router {
    let account_service = Arc::new(AccountService::new(pool));

    Router::new()
        .route("/api/auth/signup", post(signup_handler))
        .layer(Extension(account_service))
}
