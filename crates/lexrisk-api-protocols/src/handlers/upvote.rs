//! Upvote protocol endpoint handler.
//!
//! POST /api/protocols/{id}/upvote - Upvote a public protocol.

use crate::error::ApiProtocolsError;
use crate::models::UpvoteResponse;
use crate::services::ProtocolService;
use axum::{extract::Path, Extension, Json};
use lexrisk_auth::AuthUser;
use std::sync::Arc;
use uuid::Uuid;

/// Upvotes a public protocol on behalf of the authenticated user.
#[utoipa::path(
    post,
    path = "/api/protocols/{id}/upvote",
    params(("id" = Uuid, Path, description = "Protocol ID")),
    responses(
        (status = 200, description = "Upvote recorded", body = UpvoteResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Protocol not found or not public"),
    ),
    security(("bearerAuth" = [])),
    tag = "Protocols"
)]
pub async fn upvote_protocol_handler(
    Extension(user): Extension<AuthUser>,
    Extension(protocol_service): Extension<Arc<ProtocolService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UpvoteResponse>, ApiProtocolsError> {
    tracing::info!(user_id = %user.id, protocol_id = %id, "Upvoting protocol");

    let response = protocol_service.upvote(id).await?;

    Ok(Json(response))
}
