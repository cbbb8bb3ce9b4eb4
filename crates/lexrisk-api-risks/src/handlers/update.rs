//! Update risk endpoint handler.
//!
//! PATCH /api/risks/{id} - Partially update a risk event.

use crate::error::ApiRisksError;
use crate::models::{RiskResponse, UpdateRiskRequest};
use crate::services::RiskService;
use axum::{extract::Path, Extension, Json};
use lexrisk_auth::AuthUser;
use lexrisk_core::RiskEventId;
use std::sync::Arc;
use uuid::Uuid;

/// Updates a risk the authenticated user owns.
///
/// Changing probability or impact recomputes the score and level.
#[utoipa::path(
    patch,
    path = "/api/risks/{id}",
    params(("id" = Uuid, Path, description = "Risk event ID")),
    request_body = UpdateRiskRequest,
    responses(
        (status = 200, description = "Risk updated", body = RiskResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Risk not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Risks"
)]
pub async fn update_risk_handler(
    Extension(user): Extension<AuthUser>,
    Extension(risk_service): Extension<Arc<RiskService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRiskRequest>,
) -> Result<Json<RiskResponse>, ApiRisksError> {
    tracing::info!(user_id = %user.id, risk_id = %id, "Updating risk");

    let risk = risk_service
        .update_risk(user.id, RiskEventId::from_uuid(id), &request)
        .await?;

    Ok(Json(risk))
}
