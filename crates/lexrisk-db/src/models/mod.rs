//! Database entity models for lexrisk-db.
//!
//! These models represent the database tables and provide type-safe
//! interactions with PostgreSQL.

pub mod control;
pub mod protocol;
pub mod register;
pub mod review;
pub mod risk_category;
pub mod risk_event;
pub mod risk_scenario;
pub mod treatment_plan;
pub mod user;

pub use control::Control;
pub use protocol::Protocol;
pub use register::Register;
pub use review::Review;
pub use risk_category::RiskCategory;
pub use risk_event::RiskEvent;
pub use risk_scenario::RiskScenario;
pub use treatment_plan::TreatmentPlan;
pub use user::User;
