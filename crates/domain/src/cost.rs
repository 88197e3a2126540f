// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::allowance::AllowanceEntry;
use rust_decimal::Decimal;

/// Computes the estimated cost of a request from its allowance entries.
///
/// Only allowances are priced. Flights, ferries, car hire and accommodation
/// are booked through the travel provider and never contribute.
///
/// # Arguments
///
/// * `allowances` - The allowance line items
///
/// # Returns
///
/// The sum of `rate * days` over all entries, or zero for an empty list.
/// A sum that does not fit in a `Decimal` saturates at `Decimal::MAX`.
#[must_use]
pub fn compute_cost_estimate(allowances: &[AllowanceEntry]) -> Decimal {
    checked_cost_estimate(allowances).unwrap_or(Decimal::MAX)
}

/// Computes the estimated cost, or `None` if any product or the sum overflows.
#[must_use]
pub fn checked_cost_estimate(allowances: &[AllowanceEntry]) -> Option<Decimal> {
    allowances
        .iter()
        .try_fold(Decimal::ZERO, |sum, entry| sum.checked_add(entry.checked_total()?))
}
