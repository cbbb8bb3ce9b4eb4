//! Risk event service.
//!
//! All operations take the caller's `UserId` explicitly and resolve
//! ownership through the risk's register; anything the caller does not own
//! behaves exactly like something that does not exist.

use crate::error::ApiRisksError;
use crate::models::{
    CreateRiskRequest, RiskDetail, RiskResponse, ScenarioInfo, UpdateRiskRequest,
};
use lexrisk_core::{RegisterId, RiskEventId, UserId};
use lexrisk_db::{Control, Register, Review, RiskEvent, TreatmentPlan};
use lexrisk_domain::{risk_score, RiskLevel};
use sqlx::PgPool;

/// Validate a probability or impact rating.
fn validate_rating(field: &str, value: i32) -> Result<(), ApiRisksError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ApiRisksError::Validation(format!(
            "{field} must be between 1 and 5"
        )))
    }
}

/// Service for risk event operations.
#[derive(Clone)]
pub struct RiskService {
    pool: PgPool,
}

impl RiskService {
    /// Create a new risk service.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a risk event, enforcing ownership through the register owner.
    ///
    /// # Errors
    ///
    /// Returns `ApiRisksError::RiskNotFound` whether the risk is absent or
    /// owned by someone else.
    pub async fn fetch_owned_risk(
        &self,
        caller: UserId,
        risk_id: RiskEventId,
    ) -> Result<RiskEvent, ApiRisksError> {
        let risk: Option<RiskEvent> = sqlx::query_as(
            r"
            SELECT r.*
            FROM risk_events r
            JOIN registers g ON g.id = r.register_id
            WHERE r.id = $1 AND g.owner_id = $2
            ",
        )
        .bind(risk_id.as_uuid())
        .bind(caller.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        risk.ok_or(ApiRisksError::RiskNotFound)
    }

    /// Create a risk event inside a register the caller owns.
    ///
    /// Score and level are computed server-side from probability and impact.
    ///
    /// # Errors
    ///
    /// - `ApiRisksError::RegisterNotFound` when the register is absent or
    ///   owned by someone else.
    /// - `ApiRisksError::Validation` when a rating is out of range.
    pub async fn create_risk(
        &self,
        caller: UserId,
        register_id: RegisterId,
        request: &CreateRiskRequest,
    ) -> Result<RiskResponse, ApiRisksError> {
        if request.title.trim().is_empty() {
            return Err(ApiRisksError::Validation("title is required".to_string()));
        }
        validate_rating("probability", request.probability)?;
        validate_rating("impact", request.impact)?;

        let register: Option<Register> =
            sqlx::query_as("SELECT * FROM registers WHERE id = $1 AND owner_id = $2")
                .bind(register_id.as_uuid())
                .bind(caller.as_uuid())
                .fetch_optional(&self.pool)
                .await?;
        if register.is_none() {
            return Err(ApiRisksError::RegisterNotFound);
        }

        let score = risk_score(request.probability, request.impact);
        let level = RiskLevel::from_score(score);

        let risk: RiskEvent = sqlx::query_as(
            r"
            INSERT INTO risk_events
                (register_id, scenario_id, title, probability, impact, score, level)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            ",
        )
        .bind(register_id.as_uuid())
        .bind(request.scenario_id)
        .bind(request.title.trim())
        .bind(request.probability)
        .bind(request.impact)
        .bind(score)
        .bind(level)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            risk_id = %risk.id,
            register_id = %register_id,
            score,
            level = %level,
            "Risk event created"
        );

        Ok(RiskResponse::from(&risk))
    }

    /// Apply a partial update, recomputing score and level whenever
    /// probability or impact changes.
    ///
    /// # Errors
    ///
    /// Ownership and validation errors as in [`Self::create_risk`].
    pub async fn update_risk(
        &self,
        caller: UserId,
        risk_id: RiskEventId,
        request: &UpdateRiskRequest,
    ) -> Result<RiskResponse, ApiRisksError> {
        let current = self.fetch_owned_risk(caller, risk_id).await?;

        if let Some(p) = request.probability {
            validate_rating("probability", p)?;
        }
        if let Some(i) = request.impact {
            validate_rating("impact", i)?;
        }
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
        let probability = request.probability.unwrap_or(current.probability);
        let impact = request.impact.unwrap_or(current.impact);
        let scenario_id = request.scenario_id.or(current.scenario_id);

        let score = risk_score(probability, impact);
        let level = RiskLevel::from_score(score);

        let risk: RiskEvent = sqlx::query_as(
            r"
            UPDATE risk_events
            SET title = $2, probability = $3, impact = $4, score = $5, level = $6,
                scenario_id = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            ",
        )
        .bind(risk_id.as_uuid())
        .bind(title)
        .bind(probability)
        .bind(impact)
        .bind(score)
        .bind(level)
        .bind(scenario_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(risk_id = %risk.id, score, level = %level, "Risk event updated");

        Ok(RiskResponse::from(&risk))
    }

    /// Delete a risk event the caller owns. Controls and the treatment plan
    /// go with it via the cascade.
    ///
    /// # Errors
    ///
    /// Returns `ApiRisksError::RiskNotFound` for absent or foreign risks.
    pub async fn delete_risk(
        &self,
        caller: UserId,
        risk_id: RiskEventId,
    ) -> Result<(), ApiRisksError> {
        self.fetch_owned_risk(caller, risk_id).await?;

        sqlx::query("DELETE FROM risk_events WHERE id = $1")
            .bind(risk_id.as_uuid())
            .execute(&self.pool)
            .await?;

        tracing::info!(risk_id = %risk_id, "Risk event deleted");

        Ok(())
    }

    /// Fetch a risk with its controls, scenario, treatment plan, and the
    /// derived control-effectiveness metrics.
    ///
    /// # Errors
    ///
    /// Returns `ApiRisksError::RiskNotFound` for absent or foreign risks.
    pub async fn get_risk_detail(
        &self,
        caller: UserId,
        risk_id: RiskEventId,
    ) -> Result<RiskDetail, ApiRisksError> {
        let risk = self.fetch_owned_risk(caller, risk_id).await?;

        let controls: Vec<Control> = sqlx::query_as(
            "SELECT * FROM controls WHERE risk_event_id = $1 ORDER BY created_at",
        )
        .bind(risk.id)
        .fetch_all(&self.pool)
        .await?;

        let scenario = match risk.scenario_id {
            Some(scenario_id) => {
                let row: Option<(uuid::Uuid, String, String)> = sqlx::query_as(
                    r"
                    SELECT s.id, s.title, c.name
                    FROM risk_scenarios s
                    JOIN risk_categories c ON c.id = s.category_id
                    WHERE s.id = $1
                    ",
                )
                .bind(scenario_id)
                .fetch_optional(&self.pool)
                .await?;

                row.map(|(id, title, category)| ScenarioInfo {
                    id,
                    title,
                    category,
                })
            }
            None => None,
        };

        let reviews: Vec<Review> = sqlx::query_as(
            r"
            SELECT v.*
            FROM reviews v
            JOIN controls c ON c.id = v.control_id
            WHERE c.risk_event_id = $1
            ORDER BY v.control_id, v.position
            ",
        )
        .bind(risk.id)
        .fetch_all(&self.pool)
        .await?;

        let treatment_plan: Option<TreatmentPlan> =
            sqlx::query_as("SELECT * FROM treatment_plans WHERE risk_event_id = $1")
                .bind(risk.id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(RiskDetail::assemble(
            &risk,
            scenario,
            &controls,
            &reviews,
            treatment_plan.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rating_range() {
        assert!(validate_rating("probability", 1).is_ok());
        assert!(validate_rating("probability", 5).is_ok());
        assert!(validate_rating("probability", 0).is_err());
        assert!(validate_rating("impact", 6).is_err());
    }

    #[test]
    fn test_validate_rating_names_the_field() {
        let err = validate_rating("impact", 9).unwrap_err();
        assert_eq!(err.to_string(), "impact must be between 1 and 5");
    }
}
