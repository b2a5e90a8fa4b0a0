//! Contact form fields and submission status.
//!
//! ERROR HANDLING
//! ==============
//! Validation returns short user-facing messages; the form shows them inline
//! and never submits an invalid request.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use uuid::Uuid;

use crate::net::types::{CompanySize, ContactRequest};

pub const MAX_NAME_LEN: usize = 120;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 4_000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company_size: Option<CompanySize>,
    pub message: String,
}

impl ContactDraft {
    /// Trim fields and build the wire request.
    ///
    /// # Errors
    ///
    /// Returns a display message naming the first invalid field.
    pub fn validate(&self) -> Result<ContactRequest, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Enter your name.");
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err("Name is too long.");
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err("Enter a valid work email.");
        }
        let Some(company_size) = self.company_size else {
            return Err("Select your company size.");
        };
        let message = self.message.trim();
        if message.is_empty() {
            return Err("Tell us a little about what you need.");
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err("Message is too long.");
        }
        Ok(ContactRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            company_size,
            message: message.to_owned(),
        })
    }
}

/// Shape check for a trimmed address: one `@`, a non-empty local part and
/// a dotted domain that neither starts nor ends with `.`. The server applies
/// the same rule.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Progress of the most recent submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent { reference: Uuid },
    Failed(String),
}

impl SubmitStatus {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Status line shown under the form, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending...".to_owned()),
            Self::Sent { reference } => Some(format!("Thanks! We'll be in touch. Reference: {reference}")),
            Self::Failed(reason) => Some(format!("Could not send your message: {reason}")),
        }
    }
}
