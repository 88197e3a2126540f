// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A step of the request wizard.
///
/// Steps are visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FormStep {
    /// Traveller details and emergency contact.
    #[default]
    TravellerInfo,
    /// Purpose, dates and travel requirements.
    TravelDetails,
    /// Living-away-from-home allowances.
    #[serde(rename = "lafha")]
    Allowances,
    /// Declarations and submission.
    Approvals,
}

impl FormStep {
    /// Every step, in wizard order.
    pub const ALL: [Self; 4] = [
        Self::TravellerInfo,
        Self::TravelDetails,
        Self::Allowances,
        Self::Approvals,
    ];

    /// Returns the step after this one, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::TravellerInfo => Some(Self::TravelDetails),
            Self::TravelDetails => Some(Self::Allowances),
            Self::Allowances => Some(Self::Approvals),
            Self::Approvals => None,
        }
    }

    /// Returns the step before this one, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::TravellerInfo => None,
            Self::TravelDetails => Some(Self::TravellerInfo),
            Self::Allowances => Some(Self::TravelDetails),
            Self::Approvals => Some(Self::Allowances),
        }
    }

    /// Returns the step title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TravellerInfo => "Traveller Information",
            Self::TravelDetails => "Travel Details",
            Self::Allowances => "LAFHA & Allowances",
            Self::Approvals => "Approvals",
        }
    }
}

impl std::fmt::Display for FormStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
