//! Treatment plan model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// How a risk event is to be treated. At most one plan per risk event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TreatmentPlan {
    /// Unique identifier for the plan.
    pub id: Uuid,

    /// The risk event this plan treats.
    pub risk_event_id: Uuid,

    /// Treatment strategy (e.g., "MITIGATE", "ACCEPT", "TRANSFER").
    pub strategy: String,

    /// Free-form notes.
    pub notes: String,

    /// When the plan was created.
    pub created_at: DateTime<Utc>,

    /// When the plan was last updated.
    pub updated_at: DateTime<Utc>,
}
