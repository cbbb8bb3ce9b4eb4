//! Account signup API.
//!
//! Exposes `POST /api/auth/signup` and the service backing it.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiAuthError;
pub use router::auth_router;
pub use services::AccountService;
