//! Control endpoint handlers.
//!
//! POST /api/risks/{id}/controls - Attach a control to a risk.
//! PATCH /api/controls/{id} - Update a control.

use crate::error::ApiRisksError;
use crate::models::{ControlResponse, CreateControlRequest, UpdateControlRequest};
use crate::services::ControlService;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use lexrisk_auth::AuthUser;
use lexrisk_core::{ControlId, RiskEventId};
use std::sync::Arc;
use uuid::Uuid;

/// Attaches a control to a risk the authenticated user owns.
///
/// Linking a protocol increments its usage count.
#[utoipa::path(
    post,
    path = "/api/risks/{id}/controls",
    params(("id" = Uuid, Path, description = "Risk event ID")),
    request_body = CreateControlRequest,
    responses(
        (status = 201, description = "Control created", body = ControlResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Risk or protocol not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Controls"
)]
pub async fn create_control_handler(
    Extension(user): Extension<AuthUser>,
    Extension(control_service): Extension<Arc<ControlService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateControlRequest>,
) -> Result<(StatusCode, Json<ControlResponse>), ApiRisksError> {
    tracing::info!(user_id = %user.id, risk_id = %id, "Creating control");

    let control = control_service
        .create_control(user.id, RiskEventId::from_uuid(id), &request)
        .await?;

    Ok((StatusCode::CREATED, Json(control)))
}

/// Updates a control on a risk the authenticated user owns.
#[utoipa::path(
    patch,
    path = "/api/controls/{id}",
    params(("id" = Uuid, Path, description = "Control ID")),
    request_body = UpdateControlRequest,
    responses(
        (status = 200, description = "Control updated", body = ControlResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Control not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Controls"
)]
pub async fn update_control_handler(
    Extension(user): Extension<AuthUser>,
    Extension(control_service): Extension<Arc<ControlService>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateControlRequest>,
) -> Result<Json<ControlResponse>, ApiRisksError> {
    tracing::info!(user_id = %user.id, control_id = %id, "Updating control");

    let control = control_service
        .update_control(user.id, ControlId::from_uuid(id), &request)
        .await?;

    Ok(Json(control))
}
