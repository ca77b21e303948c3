//! Request and response payloads for the campaign REST backend
//!
//! The backend owns persistence, auth, and transport; these types pin down
//! the JSON shapes both sides exchange so the domain rules can run against
//! them before anything is sent. Field names follow the front end's
//! camelCase convention.

use crate::errors::{CoreError, CoreResult};
use crate::types::{AbTestId, CampaignId, CampaignStatus, Variant, VariantSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /campaigns/{id}/abtests`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAbTestRequest {
    pub campaign_id: CampaignId,
    pub name: String,
    pub variants: Vec<Variant>,
}

impl CreateAbTestRequest {
    pub fn new(campaign_id: CampaignId, name: impl Into<String>, variants: &VariantSet) -> Self {
        Self {
            campaign_id,
            name: name.into(),
            variants: variants.variants().to_vec(),
        }
    }

    pub fn from_json(body: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The carried variants as a [`VariantSet`], accepted only if they meet
    /// the submission invariant (full 100 budget, creatives everywhere)
    pub fn validated_set(&self) -> CoreResult<VariantSet> {
        let set = VariantSet::from_variants(self.variants.clone());
        set.validate_for_submission()?;
        Ok(set)
    }
}

/// Body returned by the backend for a stored A/B test
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbTestResponse {
    pub id: AbTestId,
    pub campaign_id: CampaignId,
    pub name: String,
    pub variants: Vec<Variant>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

impl AbTestResponse {
    pub fn variant_set(&self) -> VariantSet {
        VariantSet::from_variants(self.variants.clone())
    }
}

/// Body of `POST /campaigns/{id}/status` and
/// `PUT /campaigns/{id}/abtests/{testId}/status`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    pub status: CampaignStatus,
}

impl StatusChangeRequest {
    pub fn new(status: CampaignStatus) -> Self {
        Self { status }
    }

    pub fn from_json(body: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check the requested move against the transition table before it is
    /// handed to the backend
    pub fn validate(&self, current: CampaignStatus) -> CoreResult<()> {
        if current.can_transition_to(self.status) {
            Ok(())
        } else {
            Err(CoreError::IllegalTransition {
                from: current,
                to: self.status,
            })
        }
    }
}

/// The status choices a UI should offer for a record in `current`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOptionsResponse {
    pub current: CampaignStatus,
    pub legal_next: Vec<CampaignStatus>,
}

impl StatusOptionsResponse {
    pub fn for_current(current: CampaignStatus) -> Self {
        Self {
            current,
            legal_next: current.legal_transitions().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_round_trips_camel_case_fields() {
        let set = VariantSet::from_variants(vec![
            Variant::new("creative-a", 50),
            Variant::new("creative-b", 50),
        ]);
        let request = CreateAbTestRequest::new(CampaignId::new(), "Spring push", &set);

        let json = request.to_json().unwrap();

        assert!(json.contains("\"campaignId\""));
        assert!(json.contains("\"trafficAllocation\":50"));
        assert!(json.contains("\"creativeReference\":\"creative-a\""));

        let parsed = CreateAbTestRequest::from_json(&json).unwrap();
        assert_eq!(parsed.variants, request.variants);
    }

    #[test]
    fn statuses_serialize_as_screaming_snake_case() {
        let body = serde_json::to_string(&StatusChangeRequest::new(CampaignStatus::PendingApproval))
            .unwrap();

        assert_eq!(body, "{\"status\":\"PENDING_APPROVAL\"}");
    }

    #[test]
    fn validated_set_refuses_an_under_allocated_request() {
        let set = VariantSet::from_variants(vec![
            Variant::new("creative-a", 40),
            Variant::new("creative-b", 50),
        ]);
        let request = CreateAbTestRequest::new(CampaignId::new(), "Bad math", &set);

        assert!(matches!(
            request.validated_set(),
            Err(CoreError::IncompleteAllocation { total: 90, .. })
        ));
    }

    #[test]
    fn status_change_is_checked_against_the_table() {
        let pause = StatusChangeRequest::new(CampaignStatus::Paused);

        assert!(pause.validate(CampaignStatus::Active).is_ok());
        assert!(matches!(
            pause.validate(CampaignStatus::Draft),
            Err(CoreError::IllegalTransition {
                from: CampaignStatus::Draft,
                to: CampaignStatus::Paused,
            })
        ));
    }

    #[test]
    fn stored_test_bodies_parse_back_into_a_variant_set() {
        let body = format!(
            concat!(
                "{{\"id\":\"{}\",\"campaignId\":\"{}\",\"name\":\"Spring push\",",
                "\"variants\":[",
                "{{\"creativeReference\":\"creative-a\",\"trafficAllocation\":60}},",
                "{{\"creativeReference\":\"creative-b\",\"trafficAllocation\":40}}],",
                "\"status\":\"ACTIVE\",\"createdAt\":\"2026-03-01T12:00:00Z\"}}"
            ),
            AbTestId::new(),
            CampaignId::new(),
        );

        let response: AbTestResponse = serde_json::from_str(&body).unwrap();

        assert_eq!(response.status, CampaignStatus::Active);
        let set = response.variant_set();
        assert_eq!(set.total_allocation(), 100);
        assert!(set.is_valid_for_submission());
    }

    #[test]
    fn status_options_mirror_the_transition_table() {
        let options = StatusOptionsResponse::for_current(CampaignStatus::Completed);

        assert!(options.legal_next.is_empty());
    }
}
