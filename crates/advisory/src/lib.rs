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
    clippy::all
)]

//! Advisories are transient, titled messages surfaced to the traveller.
//!
//! The engine decides when an advisory fires and what it says. How it is
//! shown is up to the [`Notifier`] the session is given.

use serde::Serialize;
use tracing::{info, warn};

/// How prominently an advisory should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A confirmation or neutral notice.
    Info,
    /// Something the traveller should act on or be aware of.
    Warning,
}

/// What triggered an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// The trip is long enough to risk fringe benefits tax.
    FbtRisk,
    /// A new allowance entry crosses the 12-month reportable threshold.
    ReportableAllowance,
    /// A step change or submission was refused by validation.
    ValidationFailed,
    /// The request was submitted.
    Submitted,
}

/// A transient message for the traveller.
///
/// Advisories never block navigation or submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    /// What triggered this advisory.
    pub kind: AdvisoryKind,
    /// Short title.
    pub title: String,
    /// Message body.
    pub description: String,
    /// Display severity.
    pub severity: Severity,
}

impl Advisory {
    /// Creates a new `Advisory`.
    ///
    /// # Arguments
    ///
    /// * `kind` - What triggered the advisory
    /// * `title` - Short title
    /// * `description` - Message body
    /// * `severity` - Display severity
    #[must_use]
    pub const fn new(
        kind: AdvisoryKind,
        title: String,
        description: String,
        severity: Severity,
    ) -> Self {
        Self {
            kind,
            title,
            description,
            severity,
        }
    }

    /// Warns that a trip of `nights` nights may trigger FBT implications.
    #[must_use]
    pub fn fbt_risk(nights: u32) -> Self {
        Self::new(
            AdvisoryKind::FbtRisk,
            String::from("FBT Risk Warning"),
            format!(
                "Travel exceeds 21 nights ({nights} nights) which may trigger FBT implications"
            ),
            Severity::Warning,
        )
    }

    /// Warns that an allowance of `days` days is reportable and non-exempt.
    #[must_use]
    pub fn reportable_allowance(days: u32) -> Self {
        Self::new(
            AdvisoryKind::ReportableAllowance,
            String::from("12-Month Reportable Threshold"),
            format!(
                "An allowance of {days} days exceeds 12 months and is reportable LAFHA (non-exempt)"
            ),
            Severity::Warning,
        )
    }

    /// Reports that the form has errors that must be fixed first.
    #[must_use]
    pub fn validation_failed() -> Self {
        Self::new(
            AdvisoryKind::ValidationFailed,
            String::from("Validation Error"),
            String::from("Please check the form for errors"),
            Severity::Warning,
        )
    }

    /// Confirms that the request was submitted.
    #[must_use]
    pub fn submitted() -> Self {
        Self::new(
            AdvisoryKind::Submitted,
            String::from("Form Submitted"),
            String::from("Your travel request has been submitted successfully"),
            Severity::Info,
        )
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Receives advisories as the engine raises them.
pub trait Notifier {
    /// Surfaces one advisory.
    fn notify(&mut self, advisory: &Advisory);
}

/// Collects advisories in the order they were raised.
impl Notifier for Vec<Advisory> {
    fn notify(&mut self, advisory: &Advisory) {
        self.push(advisory.clone());
    }
}

/// Logs advisories through `tracing`.
///
/// Warnings are logged at `warn`, everything else at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, advisory: &Advisory) {
        match advisory.severity {
            Severity::Warning => warn!(
                kind = ?advisory.kind,
                title = %advisory.title,
                "{}",
                advisory.description
            ),
            Severity::Info => info!(
                kind = ?advisory.kind,
                title = %advisory.title,
                "{}",
                advisory.description
            ),
        }
    }
}
