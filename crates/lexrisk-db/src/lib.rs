//! LexRisk persistence gateway.
//!
//! Owns the Postgres connection pool, the embedded migrations, and the row
//! models for every table. Query logic for each API lives in that API crate's
//! service layer; this crate only provides the rows and the pool.

pub mod error;
pub mod migrations;
pub mod models;
pub mod pool;

pub use error::DbError;
pub use migrations::run_migrations;
pub use models::{
    Control, Protocol, Register, Review, RiskCategory, RiskEvent, RiskScenario, TreatmentPlan,
    User,
};
pub use pool::{connect, DbPool};
