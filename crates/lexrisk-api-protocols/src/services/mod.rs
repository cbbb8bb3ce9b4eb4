//! Services for the protocol library API.

pub mod protocol_service;

pub use protocol_service::ProtocolService;
