//! Risk register model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A user-owned container grouping related risk events.
///
/// Deleting a register cascades to its risk events at the database level.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Register {
    /// Unique identifier for the register.
    pub id: Uuid,

    /// The user that owns this register.
    pub owner_id: Uuid,

    /// Register name.
    pub name: String,

    /// When the register was created.
    pub created_at: DateTime<Utc>,

    /// When the register was last updated.
    pub updated_at: DateTime<Utc>,
}
