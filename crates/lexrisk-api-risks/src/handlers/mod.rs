//! Handlers for the risk register API.

pub mod controls;
pub mod create;
pub mod delete;
pub mod detail;
pub mod update;

pub use controls::{create_control_handler, update_control_handler};
pub use create::create_risk_handler;
pub use delete::delete_risk_handler;
pub use detail::get_risk_detail_handler;
pub use update::update_risk_handler;
