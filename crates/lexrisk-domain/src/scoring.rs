//! Risk score computation and qualitative level bucketing.
//!
//! A risk event carries a probability rating and an impact rating, both on a
//! 1-5 scale. The score is their product (1-25) and the level is a fixed
//! bucketing of the score.

use serde::{Deserialize, Serialize};

/// Compute the risk score from probability and impact ratings.
///
/// Both inputs are positive ratings on the 1-5 scale; the score is simply
/// their product. Pure and total over trusted inputs.
#[must_use]
pub fn risk_score(probability: i32, impact: i32) -> i32 {
    probability * impact
}

/// Qualitative risk level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[sqlx(type_name = "risk_level", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Low risk (score <= 4).
    Low,
    /// Medium risk (score 5-9).
    Medium,
    /// High risk (score 10-16).
    High,
    /// Critical risk (score >= 17).
    Critical,
}

impl RiskLevel {
    /// Determine the risk level from a score.
    ///
    /// Thresholds are fixed constants with inclusive upper bounds per band.
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=4 => Self::Low,
            5..=9 => Self::Medium,
            10..=16 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Check if this is a high or critical risk level.
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    /// Get the maximum score for this level (`None` for the open-ended
    /// critical band).
    #[must_use]
    pub fn max_score(&self) -> Option<i32> {
        match self {
            Self::Low => Some(4),
            Self::Medium => Some(9),
            Self::High => Some(16),
            Self::Critical => None,
        }
    }

    /// Stable string form, matching the stored representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
