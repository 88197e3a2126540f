// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Living-away-from-home allowance entries, their tax classification, and
//! the rule that seeds a default entry from the accommodation choice.

use crate::error::DomainError;
use crate::nights::FBT_RISK_NIGHTS;
use crate::rates::{AllowanceCategory, RateTable};
use crate::types::{AccommodationType, ItemId, TravelRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allowances longer than this many days are long-term LAFHA.
pub const LONG_TERM_THRESHOLD_DAYS: u32 = 90;

/// Allowances longer than this many days are reportable and lose the exemption.
pub const REPORTABLE_THRESHOLD_DAYS: u32 = 365;

/// One allowance line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceEntry {
    /// The entry's item id.
    pub id: ItemId,
    /// The allowance category.
    pub category: AllowanceCategory,
    /// Daily rate, copied from the rate table when the category was chosen.
    pub rate: Decimal,
    /// Number of days claimed. Always at least 1.
    pub days: u32,
}

impl AllowanceEntry {
    /// Creates an entry priced from the rate table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAllowanceDays` if `days` is zero.
    pub fn new(
        id: ItemId,
        category: AllowanceCategory,
        rates: &RateTable,
        days: u32,
    ) -> Result<Self, DomainError> {
        validate_allowance_days(days)?;
        Ok(Self {
            id,
            category,
            rate: rates.rate(category),
            days,
        })
    }

    /// Changes the category and re-prices the entry from the rate table.
    ///
    /// Any hand-entered rate is overwritten.
    pub const fn set_category(&mut self, category: AllowanceCategory, rates: &RateTable) {
        self.category = category;
        self.rate = rates.rate(category);
    }

    /// Returns `rate * days`, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.rate.saturating_mul(Decimal::from(self.days))
    }

    /// Returns `rate * days`, or `None` if it overflows.
    #[must_use]
    pub fn checked_total(&self) -> Option<Decimal> {
        self.rate.checked_mul(Decimal::from(self.days))
    }

    /// Returns the tax classification for this entry's duration.
    #[must_use]
    pub const fn classification(&self) -> AllowanceClassification {
        classify_allowance(self.days)
    }
}

/// Tax and reporting treatment of an allowance.
///
/// This is an advisory label and is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllowanceClassification {
    /// Short trips: travel allowance with PAYG withholding.
    TravelAllowancePaygw,
    /// Over 21 days: fringe benefits tax applies.
    FbtApplies,
    /// Over 90 days. Never produced; see [`classify_allowance`].
    LongTermLafha,
    /// Over 12 months: reportable, non-exempt LAFHA.
    ReportableLafha,
}

impl AllowanceClassification {
    /// Returns the payroll label for this classification.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TravelAllowancePaygw => "Travel Allowance - PAYGW",
            Self::FbtApplies => "FBT applies",
            Self::LongTermLafha => "LAFHA - over 90 days",
            Self::ReportableLafha => "Reportable LAFHA (non-exempt)",
        }
    }

    /// Returns whether the traveller should be warned about this classification.
    #[must_use]
    pub const fn is_reportable(&self) -> bool {
        matches!(self, Self::ReportableLafha)
    }
}

impl std::fmt::Display for AllowanceClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classifies an allowance by its duration in days.
///
/// The thresholds are checked from the 12-month limit down. The 90-day branch
/// follows the 21-day branch and so never matches: every duration above 90
/// days is already above 21. The intended ordering has not been confirmed, so
/// the branch is kept as written.
#[must_use]
pub const fn classify_allowance(days: u32) -> AllowanceClassification {
    if days > REPORTABLE_THRESHOLD_DAYS {
        AllowanceClassification::ReportableLafha
    } else if days > FBT_RISK_NIGHTS {
        AllowanceClassification::FbtApplies
    } else if days > LONG_TERM_THRESHOLD_DAYS {
        AllowanceClassification::LongTermLafha
    } else {
        AllowanceClassification::TravelAllowancePaygw
    }
}

/// Returns the day count a new entry starts with.
///
/// Zero nights would give a zero-cost entry, so same-day trips default to 1.
#[must_use]
pub const fn default_allowance_days(nights: u32) -> u32 {
    if nights == 0 { 1 } else { nights }
}

/// Returns the category implied by an accommodation type, if any.
///
/// Hotels are booked centrally and imply no allowance.
#[must_use]
pub const fn default_category_for(accommodation: AccommodationType) -> Option<AllowanceCategory> {
    match accommodation {
        AccommodationType::Hotel => None,
        AccommodationType::Private => Some(AllowanceCategory::Private),
        AccommodationType::Other => Some(AllowanceCategory::EmployeeArranged),
    }
}

/// The entry the defaulting rule wants to seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceDefault {
    /// Category implied by the accommodation type.
    pub category: AllowanceCategory,
    /// Rate copied from the table.
    pub rate: Decimal,
    /// Days claimed.
    pub days: u32,
}

impl AllowanceDefault {
    /// Returns the classification the seeded entry will have.
    #[must_use]
    pub const fn classification(&self) -> AllowanceClassification {
        classify_allowance(self.days)
    }

    /// Turns the default into an entry with the given id.
    #[must_use]
    pub const fn into_entry(self, id: ItemId) -> AllowanceEntry {
        AllowanceEntry {
            id,
            category: self.category,
            rate: self.rate,
            days: self.days,
        }
    }
}

/// Decides whether the request qualifies for a seeded allowance entry.
///
/// A request qualifies when accommodation is required, its type is private or
/// other, the trip is not personal travel, and no allowance entries exist yet.
/// The empty-list condition makes the rule fire at most once per empty window
/// and keeps it from overwriting entries the traveller has made.
///
/// This function is pure; the caller inserts the entry and sets the
/// allowance flag.
#[must_use]
pub fn default_allowance(request: &TravelRequest, rates: &RateTable) -> Option<AllowanceDefault> {
    if !request.require_accommodation || request.personal_travel {
        return None;
    }
    if !request.allowances.is_empty() {
        return None;
    }

    let category: AllowanceCategory =
        default_category_for(request.accommodation.accommodation_type?)?;

    Some(AllowanceDefault {
        category,
        rate: rates.rate(category),
        days: default_allowance_days(request.nights()),
    })
}

/// Validates an allowance day count.
///
/// # Errors
///
/// Returns `DomainError::InvalidAllowanceDays` if `days` is zero.
pub const fn validate_allowance_days(days: u32) -> Result<(), DomainError> {
    if days == 0 {
        return Err(DomainError::InvalidAllowanceDays { days });
    }
    Ok(())
}

/// Validates a hand-entered allowance rate.
///
/// # Errors
///
/// Returns `DomainError::NegativeAllowanceRate` if `rate` is below zero.
pub fn validate_allowance_rate(rate: Decimal) -> Result<(), DomainError> {
    if rate < Decimal::ZERO {
        return Err(DomainError::NegativeAllowanceRate { rate });
    }
    Ok(())
}
