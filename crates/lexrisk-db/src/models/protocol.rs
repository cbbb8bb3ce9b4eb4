//! Protocol model.

use chrono::{DateTime, Utc};
use lexrisk_domain::ProtocolSource;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A reusable procedural document.
///
/// Protocols are shared: many controls may reference one protocol, and a
/// protocol outlives any single reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Protocol {
    /// Unique identifier for the protocol.
    pub id: Uuid,

    /// Document title.
    pub title: String,

    /// Document body.
    pub body: String,

    /// Whether the platform or a user authored this protocol.
    pub source: ProtocolSource,

    /// Whether the protocol is visible to all users.
    pub is_public: bool,

    /// Business types this protocol applies to (e.g., "TECHNOLOGY").
    pub business_types: Vec<String>,

    /// Jurisdictions this protocol applies to (e.g., "EU").
    pub jurisdictions: Vec<String>,

    /// Optional category for classification.
    pub category_id: Option<Uuid>,

    /// How many controls have been created from this protocol.
    pub usage_count: i64,

    /// User upvotes.
    pub upvote_count: i64,

    /// When the protocol was created.
    pub created_at: DateTime<Utc>,

    /// When the protocol was last updated.
    pub updated_at: DateTime<Utc>,
}
