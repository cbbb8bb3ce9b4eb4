//! Create risk endpoint handler.
//!
//! POST /api/registers/{register_id}/risks - Create a risk event.

use crate::error::ApiRisksError;
use crate::models::{CreateRiskRequest, RiskResponse};
use crate::services::RiskService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use lexrisk_auth::AuthUser;
use lexrisk_core::RegisterId;
use std::sync::Arc;
use uuid::Uuid;

/// Creates a risk event in a register the authenticated user owns.
///
/// The score and level are computed server-side and never accepted from the
/// client.
#[utoipa::path(
    post,
    path = "/api/registers/{register_id}/risks",
    params(("register_id" = Uuid, Path, description = "Register ID")),
    request_body = CreateRiskRequest,
    responses(
        (status = 201, description = "Risk created", body = RiskResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Register not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Risks"
)]
pub async fn create_risk_handler(
    Extension(user): Extension<AuthUser>,
    Extension(risk_service): Extension<Arc<RiskService>>,
    Path(register_id): Path<Uuid>,
    Json(request): Json<CreateRiskRequest>,
) -> Result<(StatusCode, Json<RiskResponse>), ApiRisksError> {
    tracing::info!(user_id = %user.id, register_id = %register_id, "Creating risk");

    let risk = risk_service
        .create_risk(user.id, RegisterId::from_uuid(register_id), &request)
        .await?;

    Ok((StatusCode::CREATED, Json(risk)))
}
