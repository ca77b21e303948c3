//! Domain rules for advertiser campaign management
//!
//! Two pieces of logic the ad platform's UI and backend both need to agree
//! on, kept here as pure functions over immutable values:
//!
//! - the A/B test traffic-allocation engine: creating a variant set,
//!   adding/removing arms with deterministic redistribution, bounded slider
//!   adjustments, and the sum-to-100 submission check
//! - the campaign status lifecycle: the table of legal transitions from any
//!   given status
//!
//! Persistence, auth, and HTTP transport belong to the external REST
//! backend; [`messages`] only pins down the JSON shapes exchanged with it.

pub mod allocation;
pub mod errors;
pub mod logging;
pub mod messages;
pub mod status;
pub mod types;

pub use allocation::{FULL_ALLOCATION, MIN_VARIANTS};
pub use errors::{CoreError, CoreResult};
pub use status::legal_transitions_for;
pub use types::{AbTestId, CampaignId, CampaignStatus, Variant, VariantSet};

pub use messages::{
    // Campaign/test creation payloads
    AbTestResponse, CreateAbTestRequest,

    // Status lifecycle payloads
    StatusChangeRequest, StatusOptionsResponse,
};
