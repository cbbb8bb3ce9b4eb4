//! LexRisk core library.
//!
//! Shared types used across the LexRisk workspace.
//!
//! # Modules
//!
//! - [`ids`] - Strongly typed identifiers (UserId, RegisterId, RiskEventId, ...)
//! - [`error`] - Standardized error type (LexRiskError)

pub mod error;
pub mod ids;

pub use error::{LexRiskError, Result};
pub use ids::{
    CategoryId, ControlId, ProtocolId, RegisterId, RiskEventId, ScenarioId, UserId,
};
