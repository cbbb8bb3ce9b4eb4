//! Services for the risk register API.

pub mod control_service;
pub mod risk_service;

pub use control_service::ControlService;
pub use risk_service::RiskService;
