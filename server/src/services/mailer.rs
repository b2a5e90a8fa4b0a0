//! Delivery of contact submissions to the sales inbox.
//!
//! `ResendMailer` sends through the Resend API. Without mail settings the
//! server falls back to `LogMailer`, which only records the submission in
//! the trace log.

use std::sync::Arc;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::MailConfig;
use crate::services::contact::{ContactError, ContactSubmission, render_notification, subject_line};

/// Async seam for contact delivery. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// Short name of the transport, for startup logging.
    fn transport(&self) -> &'static str;

    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] when the transport rejects the message.
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Pick the transport for the configured mail settings.
#[must_use]
pub fn from_config(mail: Option<&MailConfig>) -> Arc<dyn ContactMailer> {
    match mail {
        Some(config) => Arc::new(ResendMailer::new(config)),
        None => Arc::new(LogMailer),
    }
}

pub struct ResendMailer {
    resend: Resend,
    from: String,
    inbox: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { resend: Resend::new(&config.resend_api_key), from: config.from.clone(), inbox: config.inbox.clone() }
    }
}

#[async_trait::async_trait]
impl ContactMailer for ResendMailer {
    fn transport(&self) -> &'static str {
        "resend"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let to = [self.inbox.as_str()];
        let subject = subject_line(submission);
        let html = render_notification(submission);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::Delivery(e.to_string()))?;
        Ok(())
    }
}

pub struct LogMailer;

#[async_trait::async_trait]
impl ContactMailer for LogMailer {
    fn transport(&self) -> &'static str {
        "log"
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        tracing::info!(
            reference = %submission.reference,
            name = %submission.name,
            email = %submission.email,
            company_size = submission.company_size.as_str(),
            message_chars = submission.message.chars().count(),
            "contact submission received; mail delivery not configured"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
