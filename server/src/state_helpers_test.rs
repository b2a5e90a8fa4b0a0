use super::*;
use std::sync::Mutex;
use std::time::Duration;

use client::net::types::CompanySize;
use uuid::Uuid;

use crate::rate_limit::RateLimitConfig;
use crate::services::contact::{ContactError, ContactSubmission};

/// Mailer that keeps every delivered submission.
#[derive(Default)]
pub struct RecordingMailer {
    pub delivered: Mutex<Vec<ContactSubmission>>,
}

#[async_trait::async_trait]
impl ContactMailer for RecordingMailer {
    fn transport(&self) -> &'static str {
        "recording"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        self.delivered.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Mailer whose transport always rejects.
pub struct FailingMailer;

#[async_trait::async_trait]
impl ContactMailer for FailingMailer {
    fn transport(&self) -> &'static str {
        "failing"
    }

    async fn deliver(&self, _submission: &ContactSubmission) -> Result<(), ContactError> {
        Err(ContactError::Delivery("upstream returned 503".into()))
    }
}

/// Generous limits so tests only hit them on purpose.
#[must_use]
pub fn test_rate_limiter(per_client_limit: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit,
        per_client_window: Duration::from_secs(600),
        global_limit: 1_000,
        global_window: Duration::from_secs(60),
    })
}

/// Create a test `AppState` around the given mailer.
#[must_use]
pub fn test_app_state_with_mailer(mailer: Arc<dyn ContactMailer>) -> AppState {
    AppState::new(mailer, test_rate_limiter(100))
}

/// Create a dummy validated submission.
#[must_use]
pub fn dummy_submission() -> ContactSubmission {
    ContactSubmission {
        reference: Uuid::new_v4(),
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        company_size: CompanySize::Medium,
        message: "We need two senior Rust engineers.".into(),
    }
}
