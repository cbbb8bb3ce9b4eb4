//! Risk register API.
//!
//! Risk event CRUD, mitigation controls, and the risk-detail aggregation
//! with derived control-effectiveness metrics.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiRisksError;
pub use router::risks_router;
pub use services::{ControlService, RiskService};
