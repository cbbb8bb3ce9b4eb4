//! Protocol library API.
//!
//! Listing/filtering of the public system protocol library, plus upvotes.

pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiProtocolsError;
pub use router::{protocols_public_router, protocols_router};
pub use services::ProtocolService;
