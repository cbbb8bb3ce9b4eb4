//! Mitigation control service.

use crate::error::ApiRisksError;
use crate::models::{ControlResponse, CreateControlRequest, UpdateControlRequest};
use crate::services::RiskService;
use lexrisk_core::{ControlId, RiskEventId, UserId};
use lexrisk_db::Control;
use lexrisk_domain::ControlStatus;
use sqlx::PgPool;

/// Service for control operations. Ownership is always resolved through the
/// risk's register owner.
#[derive(Clone)]
pub struct ControlService {
    pool: PgPool,
    risk_service: RiskService,
}

impl ControlService {
    /// Create a new control service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let risk_service = RiskService::new(pool.clone());
        Self { pool, risk_service }
    }

    /// Attach a control to a risk event the caller owns.
    ///
    /// Linking a protocol increments that protocol's usage count.
    ///
    /// # Errors
    ///
    /// - `ApiRisksError::RiskNotFound` for absent or foreign risks.
    /// - `ApiRisksError::ProtocolNotFound` when the linked protocol is absent.
    /// - `ApiRisksError::Validation` for an empty title.
    pub async fn create_control(
        &self,
        caller: UserId,
        risk_id: RiskEventId,
        request: &CreateControlRequest,
    ) -> Result<ControlResponse, ApiRisksError> {
        if request.title.trim().is_empty() {
            return Err(ApiRisksError::Validation("title is required".to_string()));
        }

        let risk = self.risk_service.fetch_owned_risk(caller, risk_id).await?;

        if let Some(protocol_id) = request.protocol_id {
            let updated = sqlx::query(
                "UPDATE protocols SET usage_count = usage_count + 1, updated_at = NOW() WHERE id = $1",
            )
            .bind(protocol_id)
            .execute(&self.pool)
            .await?;

            if updated.rows_affected() == 0 {
                return Err(ApiRisksError::ProtocolNotFound);
            }
        }

        let status = request.status.unwrap_or(ControlStatus::Planned);

        let control: Control = sqlx::query_as(
            r"
            INSERT INTO controls (risk_event_id, title, status, protocol_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(risk.id)
        .bind(request.title.trim())
        .bind(status)
        .bind(request.protocol_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            control_id = %control.id,
            risk_id = %risk.id,
            status = ?status,
            "Control created"
        );

        Ok(ControlResponse::from(&control))
    }

    /// Apply a partial update to a control the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `ApiRisksError::ControlNotFound` for absent or foreign
    /// controls.
    pub async fn update_control(
        &self,
        caller: UserId,
        control_id: ControlId,
        request: &UpdateControlRequest,
    ) -> Result<ControlResponse, ApiRisksError> {
        let current: Option<Control> = sqlx::query_as(
            r"
            SELECT ct.*
            FROM controls ct
            JOIN risk_events r ON r.id = ct.risk_event_id
            JOIN registers g ON g.id = r.register_id
            WHERE ct.id = $1 AND g.owner_id = $2
            ",
        )
        .bind(control_id.as_uuid())
        .bind(caller.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let current = current.ok_or(ApiRisksError::ControlNotFound)?;

        if let Some(ref title) = request.title {
            if title.trim().is_empty() {
                return Err(ApiRisksError::Validation("title is required".to_string()));
            }
        }

        let title = request
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or(&current.title);
        let status = request.status.unwrap_or(current.status);

        let control: Control = sqlx::query_as(
            r"
            UPDATE controls
            SET title = $2, status = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(control_id.as_uuid())
        .bind(title)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(control_id = %control.id, status = ?status, "Control updated");

        Ok(ControlResponse::from(&control))
    }
}
