//! Automation math for dice pools, requisitions and injuries.
//!
//! Everything here is a pure function over lenient inputs: out-of-range
//! numbers are clamped instead of rejected, so sheet code can feed raw form
//! values straight in.

mod injury;
mod outcome;
mod requisition;
mod support;

pub use injury::{
    classify_critical_injury_type, compute_injury_track_update, CriticalInjury,
    InjuryTrackUpdate, InjuryType,
};
pub use outcome::{
    build_outcome_fingerprint, normalize_search_tags, ModifierChange, OutcomeDescriptor,
    DEFAULT_MODIFIER_PRIORITY,
};
pub use requisition::{
    build_gear_bundle_request, calculate_granted_quantity, GearBundleRequest, GrantRequest,
    GrantedQuantity, RequisitionLine, BUNDLE_CATEGORY,
};
pub use support::{
    build_support_forecast, per_die_success_chance, sanitize_positive_int,
    support_success_chance, SupportForecast, SupportTest, DEFAULT_DN, MAX_POOL,
};
