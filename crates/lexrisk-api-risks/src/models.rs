//! Request and response shapes for the risk register API.

use chrono::{DateTime, Utc};
use lexrisk_db::{Control, Review, RiskEvent, TreatmentPlan};
use lexrisk_domain::{ControlEffectiveness, ControlStatus, RiskLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request to create a risk event inside a register.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRiskRequest {
    /// Short description of the risk.
    pub title: String,
    /// Probability rating (1-5).
    pub probability: i32,
    /// Impact rating (1-5).
    pub impact: i32,
    /// Optional catalog scenario reference.
    pub scenario_id: Option<Uuid>,
}

/// Partial update of a risk event. Absent fields are left unchanged; the
/// score and level are recomputed whenever probability or impact changes.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRiskRequest {
    /// New title.
    pub title: Option<String>,
    /// New probability rating (1-5).
    pub probability: Option<i32>,
    /// New impact rating (1-5).
    pub impact: Option<i32>,
    /// New scenario reference.
    pub scenario_id: Option<Uuid>,
}

/// Request to attach a control to a risk event.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateControlRequest {
    /// Short description of the control.
    pub title: String,
    /// Initial status; defaults to PLANNED.
    pub status: Option<ControlStatus>,
    /// Optional protocol this control is based on.
    pub protocol_id: Option<Uuid>,
}

/// Partial update of a control.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateControlRequest {
    /// New title.
    pub title: Option<String>,
    /// New status.
    pub status: Option<ControlStatus>,
}

/// One review of a control, as returned inside a risk detail.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInfo {
    /// Review ID.
    pub id: Uuid,
    /// Order of this review within the control (0-based).
    pub position: i32,
    /// Reviewer notes.
    pub notes: String,
    /// When the review took place.
    pub reviewed_at: DateTime<Utc>,
}

impl From<&Review> for ReviewInfo {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            position: review.position,
            notes: review.notes.clone(),
            reviewed_at: review.reviewed_at,
        }
    }
}

/// A control as returned inside a risk detail.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlItem {
    /// Control ID.
    pub id: Uuid,
    /// Short description.
    pub title: String,
    /// Implementation status.
    pub status: ControlStatus,
    /// Protocol this control is based on, if any.
    pub protocol_id: Option<Uuid>,
    /// Reviews of this control, in position order.
    pub reviews: Vec<ReviewInfo>,
    /// When the control was created.
    pub created_at: DateTime<Utc>,
}

impl ControlItem {
    fn from_rows(control: &Control, reviews: &[Review]) -> Self {
        Self {
            id: control.id,
            title: control.title.clone(),
            status: control.status,
            protocol_id: control.protocol_id,
            reviews: reviews
                .iter()
                .filter(|r| r.control_id == control.id)
                .map(ReviewInfo::from)
                .collect(),
            created_at: control.created_at,
        }
    }
}

/// The scenario reference inside a risk detail.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInfo {
    /// Scenario ID.
    pub id: Uuid,
    /// Scenario title.
    pub title: String,
    /// Category display name.
    pub category: String,
}

/// The treatment plan inside a risk detail.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentPlanInfo {
    /// Plan ID.
    pub id: Uuid,
    /// Treatment strategy.
    pub strategy: String,
    /// Free-form notes.
    pub notes: String,
}

impl From<&TreatmentPlan> for TreatmentPlanInfo {
    fn from(plan: &TreatmentPlan) -> Self {
        Self {
            id: plan.id,
            strategy: plan.strategy.clone(),
            notes: plan.notes.clone(),
        }
    }
}

/// A risk event with its derived metrics and associations.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskDetail {
    /// Risk ID.
    pub id: Uuid,
    /// The register this risk belongs to.
    pub register_id: Uuid,
    /// Short description.
    pub title: String,
    /// Probability rating (1-5).
    pub probability: i32,
    /// Impact rating (1-5).
    pub impact: i32,
    /// Derived score: probability * impact.
    pub score: i32,
    /// Derived qualitative level.
    pub level: RiskLevel,
    /// Scenario reference, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<ScenarioInfo>,
    /// Attached controls.
    pub controls: Vec<ControlItem>,
    /// Treatment plan, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_plan: Option<TreatmentPlanInfo>,
    /// Total number of controls.
    pub controls_count: i64,
    /// Number of controls whose status is IMPLEMENTED or OPERATIONAL.
    pub controls_implemented: i64,
    /// Effectiveness percentage (0 when there are no controls).
    pub controls_effectiveness: i64,
    /// When the risk was created.
    pub created_at: DateTime<Utc>,
    /// When the risk was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RiskDetail {
    /// Assemble a detail view from the fetched rows, computing the derived
    /// control metrics.
    #[must_use]
    pub fn assemble(
        risk: &RiskEvent,
        scenario: Option<ScenarioInfo>,
        controls: &[Control],
        reviews: &[Review],
        treatment_plan: Option<&TreatmentPlan>,
    ) -> Self {
        let statuses: Vec<ControlStatus> = controls.iter().map(|c| c.status).collect();
        let effectiveness = ControlEffectiveness::assess(&statuses);

        Self {
            id: risk.id,
            register_id: risk.register_id,
            title: risk.title.clone(),
            probability: risk.probability,
            impact: risk.impact,
            score: risk.score,
            level: risk.level,
            scenario,
            controls: controls
                .iter()
                .map(|c| ControlItem::from_rows(c, reviews))
                .collect(),
            treatment_plan: treatment_plan.map(TreatmentPlanInfo::from),
            controls_count: effectiveness.total,
            controls_implemented: effectiveness.implemented,
            controls_effectiveness: effectiveness.percent,
            created_at: risk.created_at,
            updated_at: risk.updated_at,
        }
    }
}

/// Risk detail response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RiskDetailResponse {
    /// The risk with derived metrics.
    pub risk: RiskDetail,
}

/// A bare risk event as returned by create/update.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RiskResponse {
    /// Risk ID.
    pub id: Uuid,
    /// The register this risk belongs to.
    pub register_id: Uuid,
    /// Short description.
    pub title: String,
    /// Probability rating (1-5).
    pub probability: i32,
    /// Impact rating (1-5).
    pub impact: i32,
    /// Derived score.
    pub score: i32,
    /// Derived level.
    pub level: RiskLevel,
    /// Scenario reference, if any.
    pub scenario_id: Option<Uuid>,
    /// When the risk was created.
    pub created_at: DateTime<Utc>,
    /// When the risk was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<&RiskEvent> for RiskResponse {
    fn from(risk: &RiskEvent) -> Self {
        Self {
            id: risk.id,
            register_id: risk.register_id,
            title: risk.title.clone(),
            probability: risk.probability,
            impact: risk.impact,
            score: risk.score,
            level: risk.level,
            scenario_id: risk.scenario_id,
            created_at: risk.created_at,
            updated_at: risk.updated_at,
        }
    }
}

/// A control as returned by create/update.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlResponse {
    /// Control ID.
    pub id: Uuid,
    /// The risk event this control mitigates.
    pub risk_event_id: Uuid,
    /// Short description.
    pub title: String,
    /// Implementation status.
    pub status: ControlStatus,
    /// Protocol this control is based on, if any.
    pub protocol_id: Option<Uuid>,
    /// When the control was created.
    pub created_at: DateTime<Utc>,
}

impl From<&Control> for ControlResponse {
    fn from(control: &Control) -> Self {
        Self {
            id: control.id,
            risk_event_id: control.risk_event_id,
            title: control.title.clone(),
            status: control.status,
            protocol_id: control.protocol_id,
            created_at: control.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn risk() -> RiskEvent {
        RiskEvent {
            id: Uuid::new_v4(),
            register_id: Uuid::new_v4(),
            scenario_id: None,
            title: "Vendor data breach".to_string(),
            probability: 4,
            impact: 4,
            score: 16,
            level: RiskLevel::High,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn control(status: ControlStatus) -> Control {
        Control {
            id: Uuid::new_v4(),
            risk_event_id: Uuid::new_v4(),
            title: "Encrypt data at rest".to_string(),
            status,
            protocol_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_assemble_computes_effectiveness() {
        let controls = vec![
            control(ControlStatus::Implemented),
            control(ControlStatus::Implemented),
            control(ControlStatus::Planned),
        ];
        let detail = RiskDetail::assemble(&risk(), None, &controls, &[], None);

        assert_eq!(detail.controls_count, 3);
        assert_eq!(detail.controls_implemented, 2);
        assert_eq!(detail.controls_effectiveness, 67);
        assert_eq!(detail.controls.len(), 3);
    }

    #[test]
    fn test_assemble_with_no_controls() {
        let detail = RiskDetail::assemble(&risk(), None, &[], &[], None);

        assert_eq!(detail.controls_count, 0);
        assert_eq!(detail.controls_implemented, 0);
        assert_eq!(detail.controls_effectiveness, 0);
    }

    #[test]
    fn test_assemble_attaches_reviews_to_their_control() {
        let reviewed = control(ControlStatus::Operational);
        let other = control(ControlStatus::Planned);
        let reviews = vec![
            Review {
                id: Uuid::new_v4(),
                control_id: reviewed.id,
                position: 0,
                notes: "Initial walkthrough".to_string(),
                reviewed_at: Utc::now(),
                created_at: Utc::now(),
            },
            Review {
                id: Uuid::new_v4(),
                control_id: reviewed.id,
                position: 1,
                notes: "Follow-up after rollout".to_string(),
                reviewed_at: Utc::now(),
                created_at: Utc::now(),
            },
        ];
        let controls = vec![reviewed.clone(), other];
        let detail = RiskDetail::assemble(&risk(), None, &controls, &reviews, None);

        assert_eq!(detail.controls[0].reviews.len(), 2);
        assert_eq!(detail.controls[0].reviews[0].position, 0);
        assert!(detail.controls[1].reviews.is_empty());
    }

    #[test]
    fn test_detail_serializes_camel_case() {
        let detail = RiskDetail::assemble(&risk(), None, &[], &[], None);
        let json = serde_json::to_value(&detail).unwrap();

        assert!(json.get("controlsCount").is_some());
        assert!(json.get("controlsImplemented").is_some());
        assert!(json.get("controlsEffectiveness").is_some());
        assert!(json.get("registerId").is_some());
        assert!(json.get("controls_count").is_none());
    }
}
