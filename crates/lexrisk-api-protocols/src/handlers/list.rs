//! List protocols endpoint handler.
//!
//! GET /api/protocols - List the public system protocol library with
//! optional filters.

use crate::error::ApiProtocolsError;
use crate::models::{ListProtocolsQuery, ProtocolListResponse};
use crate::services::ProtocolService;
use axum::{extract::Query, Extension, Json};
use std::sync::Arc;

/// Lists public, system-authored protocols.
///
/// Filters (`businessType`, `jurisdiction`, `category`) are optional and
/// conjunctive. Results are ordered by usage count descending, then creation
/// time descending.
#[utoipa::path(
    get,
    path = "/api/protocols",
    params(ListProtocolsQuery),
    responses(
        (status = 200, description = "Matching protocols", body = ProtocolListResponse),
        (status = 500, description = "Retrieval failure"),
    ),
    tag = "Protocols"
)]
pub async fn list_protocols_handler(
    Extension(protocol_service): Extension<Arc<ProtocolService>>,
    Query(query): Query<ListProtocolsQuery>,
) -> Result<Json<ProtocolListResponse>, ApiProtocolsError> {
    tracing::info!(
        business_type = ?query.business_type,
        jurisdiction = ?query.jurisdiction,
        category = ?query.category,
        "Listing protocols"
    );

    let response = protocol_service.list_protocols(&query).await?;

    Ok(Json(response))
}
