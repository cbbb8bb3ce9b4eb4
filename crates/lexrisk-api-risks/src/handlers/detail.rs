//! Risk detail endpoint handler.
//!
//! GET /api/risks/{id} - Fetch one risk with derived control metrics.

use crate::error::ApiRisksError;
use crate::models::RiskDetailResponse;
use crate::services::RiskService;
use axum::{extract::Path, Extension, Json};
use lexrisk_auth::AuthUser;
use lexrisk_core::RiskEventId;
use std::sync::Arc;
use uuid::Uuid;

/// Fetches a risk belonging to the authenticated user.
///
/// A risk owned by another user returns 404, the same as a risk that does
/// not exist.
#[utoipa::path(
    get,
    path = "/api/risks/{id}",
    params(("id" = Uuid, Path, description = "Risk event ID")),
    responses(
        (status = 200, description = "Risk with derived metrics", body = RiskDetailResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Risk not found"),
        (status = 500, description = "Unexpected failure"),
    ),
    security(("bearerAuth" = [])),
    tag = "Risks"
)]
pub async fn get_risk_detail_handler(
    Extension(user): Extension<AuthUser>,
    Extension(risk_service): Extension<Arc<RiskService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RiskDetailResponse>, ApiRisksError> {
    tracing::info!(user_id = %user.id, risk_id = %id, "Fetching risk detail");

    let risk = risk_service
        .get_risk_detail(user.id, RiskEventId::from_uuid(id))
        .await?;

    Ok(Json(RiskDetailResponse { risk }))
}

#[cfg(test)]
mod tests {
    // Handler tests require integration test setup with database
    // See crates/lexrisk-api-risks/tests/risk_detail_tests.rs
}
