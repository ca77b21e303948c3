//! Traffic-allocation engine for A/B test variants
//!
//! All operations are pure: they borrow the current [`VariantSet`] and
//! return a new one. An operation that would break an invariant refuses by
//! returning the input unchanged rather than erroring, so UI layers can
//! simply disable the affordance. The typed explanation lives in
//! [`VariantSet::validate_for_submission`].

use crate::errors::{CoreError, CoreResult};
use crate::types::{Variant, VariantSet};
use tracing::{debug, warn};

/// An A/B test never drops below two arms
pub const MIN_VARIANTS: usize = 2;

/// Allocations must sum to exactly this at submission time
pub const FULL_ALLOCATION: u32 = 100;

impl VariantSet {
    /// Fresh set for a new A/B test: two unassigned variants split 50/50
    pub fn new() -> Self {
        Self(vec![Variant::unassigned(50), Variant::unassigned(50)])
    }

    /// Append a variant and redistribute traffic evenly
    ///
    /// Every variant gets `floor(100 / (n + 1))`; the new last variant
    /// absorbs the rounding remainder so the total stays exactly 100.
    pub fn add_variant(&self) -> VariantSet {
        let count = self.0.len() + 1;
        let base = (FULL_ALLOCATION / count as u32) as u8;
        let remainder = (FULL_ALLOCATION - base as u32 * count as u32) as u8;

        let mut variants: Vec<Variant> = self
            .0
            .iter()
            .map(|v| Variant::new(v.creative_reference.clone(), base))
            .collect();
        variants.push(Variant::unassigned(base + remainder));

        VariantSet(variants)
    }

    /// Remove the variant at `index` and redistribute traffic evenly
    ///
    /// Refused (input returned unchanged) when the set is already at the
    /// two-variant floor or `index` is out of bounds. The last remaining
    /// variant absorbs the rounding remainder, same policy as
    /// [`VariantSet::add_variant`].
    pub fn remove_variant(&self, index: usize) -> VariantSet {
        if self.0.len() <= MIN_VARIANTS {
            warn!(
                index,
                len = self.0.len(),
                "refusing removal: a test keeps at least {MIN_VARIANTS} variants"
            );
            return self.clone();
        }
        if index >= self.0.len() {
            warn!(index, len = self.0.len(), "refusing removal: index out of bounds");
            return self.clone();
        }

        let mut variants = self.0.clone();
        variants.remove(index);

        let count = variants.len();
        let base = (FULL_ALLOCATION / count as u32) as u8;
        let remainder = (FULL_ALLOCATION - base as u32 * count as u32) as u8;

        for variant in variants.iter_mut() {
            variant.traffic_allocation = base;
        }
        if let Some(last) = variants.last_mut() {
            last.traffic_allocation = base + remainder;
        }

        VariantSet(variants)
    }

    /// Change one variant's allocation without touching the others
    ///
    /// Refused (input returned unchanged) when `index` is out of bounds,
    /// `value` falls outside 1..=100, or the new total would exceed the 100
    /// budget. The ceiling is hard: raising one slider never auto-shrinks
    /// the rest, while lowering is always free. No re-normalization to 100
    /// happens here; submission validation catches under-allocated sets.
    pub fn set_allocation(&self, index: usize, value: u8) -> VariantSet {
        let Some(current) = self.0.get(index) else {
            warn!(index, len = self.0.len(), "refusing allocation change: index out of bounds");
            return self.clone();
        };
        if value == 0 || value as u32 > FULL_ALLOCATION {
            warn!(index, value, "refusing allocation change: value outside 1..=100");
            return self.clone();
        }

        let new_total =
            self.total_allocation() - current.traffic_allocation as u32 + value as u32;
        if new_total > FULL_ALLOCATION {
            debug!(
                index,
                value, new_total, "refusing allocation change: budget exceeded"
            );
            return self.clone();
        }

        let mut variants = self.0.clone();
        variants[index].traffic_allocation = value;
        VariantSet(variants)
    }

    /// Whether the remove affordance should be enabled at all
    pub fn can_remove(&self) -> bool {
        self.0.len() > MIN_VARIANTS
    }

    /// Sum of all allocations; may differ from 100 mid-edit
    pub fn total_allocation(&self) -> u32 {
        self.0.iter().map(|v| v.traffic_allocation as u32).sum()
    }

    /// True iff allocations sum to exactly 100 and every variant has a creative
    pub fn is_valid_for_submission(&self) -> bool {
        self.validate_for_submission().is_ok()
    }

    /// Submission check with the first violation spelled out
    pub fn validate_for_submission(&self) -> CoreResult<()> {
        if self.0.len() < MIN_VARIANTS {
            return Err(CoreError::VariantFloor { min: MIN_VARIANTS });
        }
        for (index, variant) in self.0.iter().enumerate() {
            if variant.traffic_allocation == 0 || variant.traffic_allocation as u32 > FULL_ALLOCATION
            {
                return Err(CoreError::AllocationOutOfRange {
                    index,
                    value: variant.traffic_allocation,
                });
            }
            if variant.creative_reference.is_empty() {
                return Err(CoreError::MissingCreative { index });
            }
        }
        let total = self.total_allocation();
        if total != FULL_ALLOCATION {
            return Err(CoreError::IncompleteAllocation {
                total,
                expected: FULL_ALLOCATION,
            });
        }
        Ok(())
    }
}

impl Default for VariantSet {
    fn default() -> Self {
        Self::new()
    }
}
