// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use travel_portal_domain::TravelRequest;

/// Receives a request once it has passed full validation.
pub trait SubmissionSink {
    /// Accepts the submitted request.
    fn submit(&mut self, request: &TravelRequest);
}

/// Collects submitted requests in order.
impl SubmissionSink for Vec<TravelRequest> {
    fn submit(&mut self, request: &TravelRequest) {
        self.push(request.clone());
    }
}
