//! LexRisk domain logic.
//!
//! Pure functions and closed vocabularies for the risk-management domain.
//! Nothing in this crate performs I/O; everything is deterministic and
//! independently testable.
//!
//! # Modules
//!
//! - [`scoring`] - Risk score computation and level bucketing
//! - [`effectiveness`] - Control-effectiveness aggregation
//! - [`vocab`] - Closed status/role/source vocabularies

pub mod effectiveness;
pub mod scoring;
pub mod vocab;

pub use effectiveness::ControlEffectiveness;
pub use scoring::{risk_score, RiskLevel};
pub use vocab::{ControlStatus, ProtocolSource, UserRole};
