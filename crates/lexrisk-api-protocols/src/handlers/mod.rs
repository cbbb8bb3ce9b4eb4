//! Handlers for the protocol library API.

pub mod list;
pub mod upvote;

pub use list::list_protocols_handler;
pub use upvote::upvote_protocol_handler;
