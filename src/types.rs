//! Core domain types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a campaign record owned by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(Uuid);

impl CampaignId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for CampaignId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an A/B test within a campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbTestId(Uuid);

impl AbTestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for AbTestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AbTestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One arm of an A/B test: a creative plus its share of eligible traffic
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Opaque reference into the external creative catalog; empty until the
    /// advertiser picks a creative
    pub creative_reference: String,

    /// Integer percentage of traffic routed to this arm, 1..=100
    pub traffic_allocation: u8,
}

impl Variant {
    pub fn new(creative_reference: impl Into<String>, traffic_allocation: u8) -> Self {
        Self {
            creative_reference: creative_reference.into(),
            traffic_allocation,
        }
    }

    /// A variant with no creative assigned yet
    pub fn unassigned(traffic_allocation: u8) -> Self {
        Self::new("", traffic_allocation)
    }
}

/// Ordered collection of A/B test variants
///
/// Insertion order matters: redistribution always parks the rounding
/// remainder on the final element. Treated as an immutable value; every
/// engine operation consumes `&self` and hands back a fresh set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantSet(pub(crate) Vec<Variant>);

impl VariantSet {
    /// Build a set from explicit variants, e.g. one received over the wire
    pub fn from_variants(variants: Vec<Variant>) -> Self {
        Self(variants)
    }

    pub fn variants(&self) -> &[Variant] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Variant> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lifecycle state of a campaign record
///
/// The campaign itself lives in the backend; this crate only answers which
/// states a given state may legally move to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    PendingApproval,
    Active,
    Paused,
    Completed,
    Rejected,
    Cancelled,
}

impl CampaignStatus {
    /// Parse a wire label; unknown labels yield `None` so callers can fall
    /// back to the conservative empty transition set
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Some(CampaignStatus::Draft),
            "PENDING_APPROVAL" => Some(CampaignStatus::PendingApproval),
            "ACTIVE" => Some(CampaignStatus::Active),
            "PAUSED" => Some(CampaignStatus::Paused),
            "COMPLETED" => Some(CampaignStatus::Completed),
            "REJECTED" => Some(CampaignStatus::Rejected),
            "CANCELLED" => Some(CampaignStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "DRAFT",
            CampaignStatus::PendingApproval => "PENDING_APPROVAL",
            CampaignStatus::Active => "ACTIVE",
            CampaignStatus::Paused => "PAUSED",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Rejected => "REJECTED",
            CampaignStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
