//! Services for the signup API.

pub mod account_service;

pub use account_service::AccountService;
