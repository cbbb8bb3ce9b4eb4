//! Health check endpoints.

use axum::{extract::Extension, http::StatusCode, Json};
use serde_json::json;
use sqlx::PgPool;

/// Liveness: the process is up.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness: the database answers a trivial query.
pub async fn readyz_handler(
    Extension(pool): Extension<PgPool>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            tracing::warn!(error = ?e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    Ok(Json(json!({ "status": "ready" })))
}
