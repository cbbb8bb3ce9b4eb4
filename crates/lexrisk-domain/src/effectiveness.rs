//! Control-effectiveness aggregation.
//!
//! Operates on an already-materialized list of control statuses; performs no
//! storage access of its own.

use crate::vocab::ControlStatus;
use serde::Serialize;

/// Aggregated effectiveness of a risk event's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct ControlEffectiveness {
    /// Total number of controls.
    pub total: i64,
    /// Number of controls whose status is IMPLEMENTED or OPERATIONAL.
    pub implemented: i64,
    /// round(implemented / total * 100); 0 when there are no controls.
    pub percent: i64,
}

impl ControlEffectiveness {
    /// Assess effectiveness over a list of control statuses.
    #[must_use]
    pub fn assess(statuses: &[ControlStatus]) -> Self {
        let total = statuses.len() as i64;
        let implemented = statuses.iter().filter(|s| s.is_effective()).count() as i64;
        let percent = if total == 0 {
            0
        } else {
            (implemented as f64 / total as f64 * 100.0).round() as i64
        };
        Self {
            total,
            implemented,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ControlStatus::{Implemented, InProgress, Operational, Planned};

    #[test]
    fn test_no_controls_is_zero_percent() {
        let eff = ControlEffectiveness::assess(&[]);
        assert_eq!(eff.total, 0);
        assert_eq!(eff.implemented, 0);
        assert_eq!(eff.percent, 0);
    }

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let eff = ControlEffectiveness::assess(&[Implemented, Implemented, Planned]);
        assert_eq!(eff.total, 3);
        assert_eq!(eff.implemented, 2);
        assert_eq!(eff.percent, 67);
    }

    #[test]
    fn test_one_operational_of_four_is_25() {
        let eff = ControlEffectiveness::assess(&[Operational, Planned, Planned, Planned]);
        assert_eq!(eff.total, 4);
        assert_eq!(eff.implemented, 1);
        assert_eq!(eff.percent, 25);
    }

    #[test]
    fn test_all_effective_is_100() {
        let eff = ControlEffectiveness::assess(&[Implemented, Operational]);
        assert_eq!(eff.percent, 100);
    }

    #[test]
    fn test_in_progress_does_not_count() {
        let eff = ControlEffectiveness::assess(&[InProgress, InProgress, Operational]);
        assert_eq!(eff.implemented, 1);
        assert_eq!(eff.percent, 33);
    }
}
