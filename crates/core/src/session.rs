// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{NavigationOutcome, SubmitOutcome, TransitionResult};
use crate::submission::SubmissionSink;
use rust_decimal::Decimal;
use tracing::{debug, info};
use travel_portal_advisory::{Advisory, Notifier};
use travel_portal_domain::{
    FormStep, RateTable, TravelRequest, ValidationErrors, is_step_complete, validate_all,
    validate_step,
};

/// One request being filled in through the wizard.
///
/// The session owns the request, the current wizard step, and the errors
/// from the most recent validation pass. Every change goes through
/// [`Session::dispatch`]; advisories are forwarded to the notifier as they
/// are raised.
#[derive(Debug)]
pub struct Session<N: Notifier> {
    rates: RateTable,
    request: TravelRequest,
    step: FormStep,
    errors: ValidationErrors,
    submitted: bool,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    /// Starts a session with a fresh request on the first step.
    #[must_use]
    pub fn new(rates: RateTable, notifier: N) -> Self {
        Self {
            rates,
            request: TravelRequest::new(),
            step: FormStep::default(),
            errors: ValidationErrors::new(),
            submitted: false,
            notifier,
        }
    }

    /// Returns the request.
    #[must_use]
    pub const fn request(&self) -> &TravelRequest {
        &self.request
    }

    /// Returns the rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the current wizard step.
    #[must_use]
    pub const fn current_step(&self) -> FormStep {
        self.step
    }

    /// Returns the errors from the most recent validation pass.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the notifier.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns whether the request has been submitted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Returns the total estimated allowance cost.
    #[must_use]
    pub fn cost_estimate(&self) -> Decimal {
        self.request.cost_estimate()
    }

    /// Returns whether a step currently has no validation errors.
    ///
    /// This does not record errors on the session.
    #[must_use]
    pub fn is_step_complete(&self, step: FormStep) -> bool {
        is_step_complete(&self.request, step)
    }

    /// Applies one command to the request.
    ///
    /// On failure the request is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionClosed` after submission, or the error
    /// from [`apply`] if the command is rejected.
    pub fn dispatch(&mut self, command: Command) -> Result<(), CoreError> {
        if self.submitted {
            return Err(CoreError::SessionClosed);
        }

        let result: TransitionResult = apply(&self.rates, &self.request, command)?;
        self.request = result.new_state;
        for advisory in &result.advisories {
            self.notifier.notify(advisory);
        }
        Ok(())
    }

    /// Validates the current step and moves forward if it is clean.
    ///
    /// The errors from this pass replace any previous errors.
    pub fn next_step(&mut self) -> NavigationOutcome {
        self.errors = validate_step(&self.request, self.step);

        if !self.errors.is_empty() {
            debug!(step = %self.step, errors = self.errors.len(), "Step blocked");
            self.notifier.notify(&Advisory::validation_failed());
            return NavigationOutcome::Blocked;
        }

        match self.step.next() {
            Some(step) => {
                info!(from = %self.step, to = %step, "Advancing step");
                self.step = step;
                NavigationOutcome::Advanced(step)
            }
            None => NavigationOutcome::AtLastStep,
        }
    }

    /// Moves back one step without validating.
    ///
    /// Returns the new step, or `None` if already on the first step.
    pub fn previous_step(&mut self) -> Option<FormStep> {
        let step: FormStep = self.step.previous()?;
        self.step = step;
        Some(step)
    }

    /// Jumps to any step without validating.
    pub const fn go_to_step(&mut self, step: FormStep) {
        self.step = step;
    }

    /// Validates every step and records the errors.
    ///
    /// Returns whether the request is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_all(&self.request);
        self.errors.is_empty()
    }

    /// Submits the request if it passes full validation.
    ///
    /// A rejected submission leaves the session open so the request can be
    /// corrected. A successful one closes it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionClosed` if the request was already submitted.
    pub fn submit<S: SubmissionSink>(&mut self, sink: &mut S) -> Result<SubmitOutcome, CoreError> {
        if self.submitted {
            return Err(CoreError::SessionClosed);
        }

        if !self.validate() {
            info!(errors = self.errors.len(), "Submission rejected");
            self.notifier.notify(&Advisory::validation_failed());
            return Ok(SubmitOutcome::Rejected);
        }

        sink.submit(&self.request);
        self.submitted = true;
        info!(
            travellers = self.request.travellers.len(),
            nights = self.request.nights(),
            cost_estimate = %self.request.cost_estimate(),
            "Request submitted"
        );
        self.notifier.notify(&Advisory::submitted());
        Ok(SubmitOutcome::Submitted)
    }
}
