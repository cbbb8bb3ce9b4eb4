//! Risk event model.

use chrono::{DateTime, Utc};
use lexrisk_domain::RiskLevel;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One identified risk inside a register.
///
/// `score` and `level` are derived columns: score = probability * impact and
/// level = bucket(score). The service layer recomputes both on every write
/// that touches probability or impact.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RiskEvent {
    /// Unique identifier for the risk event.
    pub id: Uuid,

    /// The register this risk belongs to.
    pub register_id: Uuid,

    /// Optional catalog scenario this risk references.
    pub scenario_id: Option<Uuid>,

    /// Short description of the risk.
    pub title: String,

    /// Probability rating (1-5).
    pub probability: i32,

    /// Impact rating (1-5).
    pub impact: i32,

    /// Derived score: probability * impact.
    pub score: i32,

    /// Derived qualitative level.
    pub level: RiskLevel,

    /// When the risk was created.
    pub created_at: DateTime<Utc>,

    /// When the risk was last updated.
    pub updated_at: DateTime<Utc>,
}
