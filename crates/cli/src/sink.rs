// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::{error, info};
use travel_portal::SubmissionSink;
use travel_portal_domain::TravelRequest;

/// Logs the submission payload as JSON.
#[derive(Debug, Default)]
pub struct LoggingSink {
    submitted: usize,
}

impl LoggingSink {
    /// Returns how many requests have been submitted.
    pub const fn submitted(&self) -> usize {
        self.submitted
    }
}

impl SubmissionSink for LoggingSink {
    fn submit(&mut self, request: &TravelRequest) {
        self.submitted += 1;
        match serde_json::to_string(request) {
            Ok(payload) => info!(%payload, "Submission payload"),
            Err(err) => error!("Failed to serialize submission payload: {err}"),
        }
    }
}
