//! Strongly typed identifiers.
//!
//! Newtype wrappers around [`Uuid`] for every entity in the system. Using
//! distinct types prevents accidentally passing, say, a `ControlId` where a
//! `RiskEventId` is expected.
//!
//! # Example
//!
//! ```
//! use lexrisk_core::{RegisterId, RiskEventId};
//!
//! let register = RegisterId::new();
//! let risk = RiskEventId::new();
//!
//! fn requires_register(id: RegisterId) -> String {
//!     id.to_string()
//! }
//!
//! let _ = requires_register(register);
//! // requires_register(risk); // does not compile
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The underlying UUID parse error message.
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for user accounts.
    UserId
);

define_id!(
    /// Strongly typed identifier for risk registers.
    ///
    /// A register is a user-owned container grouping related risk events.
    RegisterId
);

define_id!(
    /// Strongly typed identifier for risk events.
    RiskEventId
);

define_id!(
    /// Strongly typed identifier for mitigation controls.
    ControlId
);

define_id!(
    /// Strongly typed identifier for protocols (reusable procedural documents).
    ProtocolId
);

define_id!(
    /// Strongly typed identifier for risk scenarios (catalog entries).
    ScenarioId
);

define_id!(
    /// Strongly typed identifier for risk categories.
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_valid_id() {
        let id = RiskEventId::new();
        let id_str = id.to_string();
        // UUID format: 8-4-4-4-12 hex digits
        assert_eq!(id_str.len(), 36);
        assert!(id_str.contains('-'));
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = RegisterId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn test_display_returns_uuid_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_default_creates_distinct_ids() {
        let id1 = ControlId::default();
        let id2 = ControlId::default();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_parse_valid_uuid() {
        let id: ProtocolId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_invalid_string_fails() {
        let result: std::result::Result<ScenarioId, _> = "not-a-uuid".parse();
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "ScenarioId");
    }

    #[test]
    fn test_serde_transparent_roundtrip() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        // Serializes as a bare UUID string, not an object
        assert!(json.starts_with('"'));
        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
