//! Risk register API router configuration.
//!
//! All endpoints require authentication; the auth middleware injects the
//! caller's identity into the request extensions.

use crate::handlers::{
    create_control_handler, create_risk_handler, delete_risk_handler, get_risk_detail_handler,
    update_control_handler, update_risk_handler,
};
use crate::services::{ControlService, RiskService};
use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Extension, Router,
};
use lexrisk_auth::auth_middleware;
use sqlx::PgPool;
use std::sync::Arc;

/// Create the risk register router.
///
/// # Endpoints
///
/// - `POST /api/registers/:register_id/risks` - Create a risk event
/// - `GET /api/risks/:id` - Risk detail with derived control metrics
/// - `PATCH /api/risks/:id` - Update a risk event
/// - `DELETE /api/risks/:id` - Delete a risk event
/// - `POST /api/risks/:id/controls` - Attach a control
/// - `PATCH /api/controls/:id` - Update a control
pub fn risks_router(pool: PgPool) -> Router {
    let risk_service = Arc::new(RiskService::new(pool.clone()));
    let control_service = Arc::new(ControlService::new(pool));

    Router::new()
        .route("/api/registers/:register_id/risks", post(create_risk_handler))
        .route("/api/risks/:id", get(get_risk_detail_handler))
        .route("/api/risks/:id", patch(update_risk_handler))
        .route("/api/risks/:id", delete(delete_risk_handler))
        .route("/api/risks/:id/controls", post(create_control_handler))
        .route("/api/controls/:id", patch(update_control_handler))
        .layer(middleware::from_fn(auth_middleware))
        .layer(Extension(risk_service))
        .layer(Extension(control_service))
}
