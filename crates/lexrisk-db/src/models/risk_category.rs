//! Risk category model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A classification bucket for scenarios and protocols.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RiskCategory {
    /// Unique identifier for the category.
    pub id: Uuid,

    /// Display name (e.g., "Data Protection").
    pub name: String,

    /// When the category was created.
    pub created_at: DateTime<Utc>,

    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}
