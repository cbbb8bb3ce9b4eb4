//! Risk scenario model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog entry (category + title) that risk events may reference for
/// classification.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RiskScenario {
    /// Unique identifier for the scenario.
    pub id: Uuid,

    /// The category this scenario belongs to.
    pub category_id: Uuid,

    /// Scenario title.
    pub title: String,

    /// When the scenario was created.
    pub created_at: DateTime<Utc>,

    /// When the scenario was last updated.
    pub updated_at: DateTime<Utc>,
}
