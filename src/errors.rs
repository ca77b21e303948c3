//! Error types for campaign domain rules

use crate::types::CampaignStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("variant set must keep at least {min} variants")]
    VariantFloor { min: usize },

    #[error("variant index {index} out of bounds for set of {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("allocation {value} for variant {index} outside 1..=100")]
    AllocationOutOfRange { index: usize, value: u8 },

    #[error("allocation budget exceeded: total would be {total}")]
    BudgetExceeded { total: u32 },

    #[error("allocations sum to {total}, expected exactly {expected}")]
    IncompleteAllocation { total: u32, expected: u32 },

    #[error("variant {index} has no creative assigned")]
    MissingCreative { index: usize },

    #[error("illegal status transition: {from} -> {to}")]
    IllegalTransition {
        from: CampaignStatus,
        to: CampaignStatus,
    },

    #[error("unknown campaign status: {input}")]
    UnknownStatus { input: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
