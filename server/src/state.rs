//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the contact mail transport and the submission rate limiter.
//! The landing page itself is stateless on the server.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::services::mailer::ContactMailer;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Transport for contact submissions (Resend or log-only).
    pub mailer: Arc<dyn ContactMailer>,
    /// In-memory rate limiter for `POST /api/contact`.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Arc<dyn ContactMailer>, rate_limiter: RateLimiter) -> Self {
        Self { mailer, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
