//! Shared fixtures for integration tests

use campaign_core::{CampaignId, Variant, VariantSet};

pub struct TestFixtures;

impl TestFixtures {
    pub fn campaign_id() -> CampaignId {
        CampaignId::new()
    }

    /// A submittable two-arm set: creatives assigned, 50/50 split
    pub fn ready_two_arm_set() -> VariantSet {
        VariantSet::from_variants(vec![
            Variant::new("creative-hero-banner", 50),
            Variant::new("creative-video-15s", 50),
        ])
    }

    /// Assign a creative to every variant, keeping allocations as-is
    pub fn with_creatives(set: &VariantSet) -> VariantSet {
        let variants = set
            .iter()
            .enumerate()
            .map(|(i, v)| Variant::new(format!("creative-{i}"), v.traffic_allocation))
            .collect();
        VariantSet::from_variants(variants)
    }

    pub fn allocations(set: &VariantSet) -> Vec<u8> {
        set.iter().map(|v| v.traffic_allocation).collect()
    }
}
