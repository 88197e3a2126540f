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

mod apply;
mod command;
mod error;
mod session;
mod state;
mod submission;

#[cfg(test)]
mod tests;

pub use apply::{apply, apply_allowance_defaulting};
pub use command::{
    CarHireUpdate, Command, EmergencyContactUpdate, FerryUpdate, FlightLegUpdate,
    TravellerUpdate,
};
pub use error::CoreError;
pub use session::Session;
pub use state::{NavigationOutcome, SubmitOutcome, TransitionResult};
pub use submission::SubmissionSink;
