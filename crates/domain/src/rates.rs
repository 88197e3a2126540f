// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Allowance categories and the daily rate table that prices them.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// An allowance category, keyed into the [`RateTable`].
///
/// Categories serialize as their payroll labels, e.g. `"Private (OR23)"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum AllowanceCategory {
    /// Full day meals and incidentals.
    #[serde(rename = "Full Day (OR03)")]
    FullDay,
    /// Privately arranged accommodation.
    #[serde(rename = "Private (OR23)")]
    Private,
    /// Other employee-arranged accommodation.
    #[serde(rename = "Employee-arranged (OR24)")]
    EmployeeArranged,
    /// Remote area loading.
    #[serde(rename = "Remote Area")]
    RemoteArea,
    /// Short notice or substandard accommodation loading.
    #[serde(rename = "Short Notice / Substandard")]
    ShortNotice,
    /// Incidentals only.
    #[serde(rename = "Incidentals (0A57)")]
    Incidentals,
    /// Breakfast only.
    Breakfast,
    /// Lunch only.
    Lunch,
    /// Dinner only.
    Dinner,
}

impl AllowanceCategory {
    /// Every category, in rate table order.
    pub const ALL: [Self; 9] = [
        Self::FullDay,
        Self::Private,
        Self::EmployeeArranged,
        Self::RemoteArea,
        Self::ShortNotice,
        Self::Incidentals,
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
    ];

    /// Returns the payroll label of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullDay => "Full Day (OR03)",
            Self::Private => "Private (OR23)",
            Self::EmployeeArranged => "Employee-arranged (OR24)",
            Self::RemoteArea => "Remote Area",
            Self::ShortNotice => "Short Notice / Substandard",
            Self::Incidentals => "Incidentals (0A57)",
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for AllowanceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AllowanceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::UnknownAllowanceCategory(s.to_string()))
    }
}

/// Daily rates for every allowance category.
///
/// A table always prices every category, so lookups cannot fail. Rates are
/// copied into allowance entries when they are created or re-categorised;
/// a table is read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: [Decimal; AllowanceCategory::ALL.len()],
}

impl RateTable {
    /// Builds a rate table from a category to rate mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any category has no rate
    /// - Any rate is negative
    pub fn new(rates: &HashMap<AllowanceCategory, Decimal>) -> Result<Self, DomainError> {
        let mut table: [Decimal; AllowanceCategory::ALL.len()] =
            [Decimal::ZERO; AllowanceCategory::ALL.len()];

        for category in AllowanceCategory::ALL {
            let rate: Decimal = *rates
                .get(&category)
                .ok_or(DomainError::MissingRate(category))?;
            if rate < Decimal::ZERO {
                return Err(DomainError::NegativeAllowanceRate { rate });
            }
            table[category.index()] = rate;
        }

        Ok(Self { rates: table })
    }

    /// Returns the standard published rate table.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rates: [
                Decimal::new(14870, 2),
                Decimal::new(26834, 2),
                Decimal::new(28970, 2),
                Decimal::new(4190, 2),
                Decimal::new(4190, 2),
                Decimal::new(1212, 2),
                Decimal::new(3272, 2),
                Decimal::new(4651, 2),
                Decimal::new(6947, 2),
            ],
        }
    }

    /// Returns the daily rate for a category.
    #[must_use]
    pub const fn rate(&self, category: AllowanceCategory) -> Decimal {
        self.rates[category.index()]
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
