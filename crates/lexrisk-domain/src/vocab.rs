//! Closed vocabularies for the risk-management domain.
//!
//! Statuses, roles, and sources are tagged variants rather than open string
//! sets, so invalid values cannot flow past deserialization.

use serde::{Deserialize, Serialize};

/// Implementation status of a mitigation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[sqlx(type_name = "control_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ControlStatus {
    /// Planned but not yet started.
    Planned,
    /// Implementation underway.
    InProgress,
    /// Implemented but not yet in routine operation.
    Implemented,
    /// Implemented and operating routinely.
    Operational,
    /// Retired from service.
    Retired,
}

impl ControlStatus {
    /// Whether this status counts toward control effectiveness.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        matches!(self, Self::Implemented | Self::Operational)
    }
}

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// Standard customer account. The default for self-service signup.
    Client,
    /// Administrative account.
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Client
    }
}

/// Authorship of a protocol document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[sqlx(type_name = "protocol_source", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ProtocolSource {
    /// Authored and maintained by the platform.
    System,
    /// Authored by a user.
    User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_statuses() {
        assert!(ControlStatus::Implemented.is_effective());
        assert!(ControlStatus::Operational.is_effective());
        assert!(!ControlStatus::Planned.is_effective());
        assert!(!ControlStatus::InProgress.is_effective());
        assert!(!ControlStatus::Retired.is_effective());
    }

    #[test]
    fn test_default_role_is_client() {
        assert_eq!(UserRole::default(), UserRole::Client);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&ControlStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: ControlStatus = serde_json::from_str("\"OPERATIONAL\"").unwrap();
        assert_eq!(back, ControlStatus::Operational);
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Client).unwrap(), "\"CLIENT\"");
        assert_eq!(
            serde_json::to_string(&ProtocolSource::System).unwrap(),
            "\"SYSTEM\""
        );
    }
}
