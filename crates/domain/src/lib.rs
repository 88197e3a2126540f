// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allowance;
mod cost;
mod error;
mod nights;
mod rates;
mod step;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use allowance::{
    AllowanceClassification, AllowanceDefault, AllowanceEntry, LONG_TERM_THRESHOLD_DAYS,
    REPORTABLE_THRESHOLD_DAYS, classify_allowance, default_allowance, default_allowance_days,
    default_category_for, validate_allowance_days, validate_allowance_rate,
};
pub use cost::{checked_cost_estimate, compute_cost_estimate};
pub use error::DomainError;
pub use nights::{FBT_RISK_NIGHTS, compute_nights, exceeds_fbt_risk};
pub use rates::{AllowanceCategory, RateTable};
pub use step::FormStep;
pub use types::{
    Accommodation, AccommodationType, CarHire, Declaration, Declarations, EmergencyContact,
    Ferry, FlightLeg, ItemId, TravelRequest, Traveller, iso_date,
};
pub use validation::{
    CarHireField, EmergencyContactField, FieldPath, LegField, TravellerField, ValidationErrors,
    is_step_complete, validate_all, validate_step,
};
