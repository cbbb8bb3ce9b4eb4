//! Protocol library API router configuration.

use crate::handlers::{list_protocols_handler, upvote_protocol_handler};
use crate::services::ProtocolService;
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use lexrisk_auth::auth_middleware;
use sqlx::PgPool;
use std::sync::Arc;

/// Create the public protocol router (no authentication).
///
/// # Endpoints
///
/// - `GET /api/protocols` - List public system protocols with optional filters
pub fn protocols_public_router(pool: PgPool) -> Router {
    let protocol_service = Arc::new(ProtocolService::new(pool));

    Router::new()
        .route("/api/protocols", get(list_protocols_handler))
        .layer(Extension(protocol_service))
}

/// Create the authenticated protocol router.
///
/// # Endpoints
///
/// - `POST /api/protocols/:id/upvote` - Upvote a public protocol
pub fn protocols_router(pool: PgPool) -> Router {
    let protocol_service = Arc::new(ProtocolService::new(pool));

    Router::new()
        .route("/api/protocols/:id/upvote", post(upvote_protocol_handler))
        .layer(middleware::from_fn(auth_middleware))
        .layer(Extension(protocol_service))
}
