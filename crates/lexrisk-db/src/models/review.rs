//! Control review model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One review of a control. Reviews are ordered by `position` within their
/// control.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    /// Unique identifier for the review.
    pub id: Uuid,

    /// The control this review belongs to.
    pub control_id: Uuid,

    /// Order of this review within the control (0-based).
    pub position: i32,

    /// Reviewer notes.
    pub notes: String,

    /// When the review took place.
    pub reviewed_at: DateTime<Utc>,

    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
