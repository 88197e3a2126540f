// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use travel_portal_advisory::Advisory;
use travel_portal_domain::{FormStep, TravelRequest};

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The request after the command and its derived recomputation.
    pub new_state: TravelRequest,
    /// Advisories raised by the transition, in the order they fired.
    pub advisories: Vec<Advisory>,
}

/// The outcome of asking the wizard to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The current step was valid and the wizard moved to this step.
    Advanced(FormStep),
    /// The current step was valid but is already the last one.
    AtLastStep,
    /// The current step has validation errors; the wizard did not move.
    Blocked,
}

/// The outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request was handed to the submission sink.
    Submitted,
    /// The request has validation errors and was not submitted.
    Rejected,
}
