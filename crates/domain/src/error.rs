// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rates::AllowanceCategory;
use crate::types::ItemId;
use rust_decimal::Decimal;

/// Errors raised when a requested change would break a record invariant.
///
/// These are distinct from field validation errors: a rejected change never
/// reaches the record, while validation errors describe a record that is
/// well-formed but incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item with the given id exists in the named collection.
    ItemNotFound {
        /// The collection that was searched (e.g. "travellers").
        collection: &'static str,
        /// The id that was not found.
        id: ItemId,
    },
    /// The primary traveller cannot be removed.
    PrimaryTravellerRequired,
    /// Additional travellers may only be added when booking on behalf of others.
    NotBookingOnBehalf,
    /// Allowance entries must cover at least one day.
    InvalidAllowanceDays {
        /// The rejected day count.
        days: u32,
    },
    /// Allowance rates cannot be negative.
    NegativeAllowanceRate {
        /// The rejected rate.
        rate: Decimal,
    },
    /// The allowance total would exceed the largest representable amount.
    CostEstimateOverflow,
    /// Allowances cannot be claimed for trips with a personal travel component.
    AllowanceUnavailableForPersonalTravel,
    /// A rate table did not price every allowance category.
    MissingRate(AllowanceCategory),
    /// An allowance category label did not match any known category.
    UnknownAllowanceCategory(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound { collection, id } => {
                write!(f, "No entry with id {id} in {collection}")
            }
            Self::PrimaryTravellerRequired => {
                write!(f, "The primary traveller cannot be removed")
            }
            Self::NotBookingOnBehalf => write!(
                f,
                "Additional travellers can only be added when booking on behalf of others"
            ),
            Self::InvalidAllowanceDays { days } => {
                write!(f, "Invalid allowance days: {days}. Must be at least 1")
            }
            Self::NegativeAllowanceRate { rate } => {
                write!(f, "Invalid allowance rate: {rate}. Must not be negative")
            }
            Self::CostEstimateOverflow => {
                write!(f, "Allowance total exceeds the largest supported amount")
            }
            Self::AllowanceUnavailableForPersonalTravel => write!(
                f,
                "LAFHA is not available for trips with personal travel components"
            ),
            Self::MissingRate(category) => {
                write!(f, "Rate table has no rate for '{category}'")
            }
            Self::UnknownAllowanceCategory(label) => {
                write!(f, "Unknown allowance category: '{label}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
