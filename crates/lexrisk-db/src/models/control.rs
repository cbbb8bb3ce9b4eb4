//! Mitigation control model.

use chrono::{DateTime, Utc};
use lexrisk_domain::ControlStatus;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A mitigation measure attached to a risk event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Control {
    /// Unique identifier for the control.
    pub id: Uuid,

    /// The risk event this control mitigates.
    pub risk_event_id: Uuid,

    /// Short description of the control.
    pub title: String,

    /// Implementation status.
    pub status: ControlStatus,

    /// Optional protocol this control is based on.
    pub protocol_id: Option<Uuid>,

    /// When the control was created.
    pub created_at: DateTime<Utc>,

    /// When the control was last updated.
    pub updated_at: DateTime<Utc>,
}
