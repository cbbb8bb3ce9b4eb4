//! Handlers for the signup API.

pub mod signup;

pub use signup::signup_handler;
