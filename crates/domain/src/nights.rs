// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Trips and allowances longer than this many nights carry a fringe benefits
/// tax risk.
pub const FBT_RISK_NIGHTS: u32 = 21;

/// Computes the number of nights between two trip dates.
///
/// The result is the absolute day difference, so the order of the dates does
/// not matter. Calendar dates have no time component, which makes the whole
/// day count equal to its ceiling.
///
/// # Arguments
///
/// * `from` - First day of travel
/// * `to` - Last day of travel
///
/// # Returns
///
/// `None` if either date is missing; callers keep their previous value.
#[must_use]
pub fn compute_nights(from: Option<Date>, to: Option<Date>) -> Option<u32> {
    let (from, to): (Date, Date) = (from?, to?);
    let days: u64 = (to - from).whole_days().unsigned_abs();
    Some(u32::try_from(days).unwrap_or(u32::MAX))
}

/// Returns whether a trip of this length should raise an FBT risk advisory.
#[must_use]
pub const fn exceeds_fbt_risk(nights: u32) -> bool {
    nights > FBT_RISK_NIGHTS
}
