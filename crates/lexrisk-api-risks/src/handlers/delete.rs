//! Delete risk endpoint handler.
//!
//! DELETE /api/risks/{id} - Delete a risk event and everything attached to it.

use crate::error::ApiRisksError;
use crate::services::RiskService;
use axum::{extract::Path, http::StatusCode, Extension};
use lexrisk_auth::AuthUser;
use lexrisk_core::RiskEventId;
use std::sync::Arc;
use uuid::Uuid;

/// Deletes a risk the authenticated user owns.
#[utoipa::path(
    delete,
    path = "/api/risks/{id}",
    params(("id" = Uuid, Path, description = "Risk event ID")),
    responses(
        (status = 204, description = "Risk deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Risk not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Risks"
)]
pub async fn delete_risk_handler(
    Extension(user): Extension<AuthUser>,
    Extension(risk_service): Extension<Arc<RiskService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiRisksError> {
    tracing::info!(user_id = %user.id, risk_id = %id, "Deleting risk");

    risk_service
        .delete_risk(user.id, RiskEventId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
