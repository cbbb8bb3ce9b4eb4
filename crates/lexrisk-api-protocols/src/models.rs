//! Request and response shapes for the protocol library API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Display name used when a protocol has no linked category.
pub const DEFAULT_CATEGORY_NAME: &str = "General";

/// Query filters for listing protocols. All filters are optional and
/// conjunctive; an absent filter imposes no constraint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListProtocolsQuery {
    /// Only protocols applicable to this business type (e.g., "TECHNOLOGY").
    pub business_type: Option<String>,
    /// Only protocols applicable to this jurisdiction (e.g., "EU").
    pub jurisdiction: Option<String>,
    /// Only protocols in this category.
    pub category: Option<Uuid>,
}

/// One protocol in a listing, with its category resolved to a display name.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolItem {
    /// Protocol ID.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Document body.
    pub body: String,
    /// Resolved category display name, `"General"` when uncategorized.
    pub category: String,
    /// Business types this protocol applies to.
    pub business_types: Vec<String>,
    /// Jurisdictions this protocol applies to.
    pub jurisdictions: Vec<String>,
    /// How many controls have been created from this protocol.
    pub usage_count: i64,
    /// User upvotes.
    pub upvote_count: i64,
    /// When the protocol was created.
    pub created_at: DateTime<Utc>,
}

/// Listing response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProtocolListResponse {
    /// The matching protocols, most-used and most-recent first.
    pub protocols: Vec<ProtocolItem>,
    /// Number of protocols returned.
    pub total: i64,
}

/// Upvote response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpvoteResponse {
    /// Protocol ID.
    pub id: Uuid,
    /// The new upvote count.
    pub upvote_count: i64,
}
