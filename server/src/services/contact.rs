//! Contact submission service.
//!
//! Validates `POST /api/contact` bodies and renders the notification email
//! sent to the sales inbox.

use client::net::types::{CompanySize, ContactRequest};
use client::state::contact::{MAX_MESSAGE_LEN, MAX_NAME_LEN, is_valid_email};
use uuid::Uuid;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_notification.html");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("name is too long")]
    NameTooLong,
    #[error("invalid email")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
    #[error("message is too long")]
    MessageTooLong,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A validated submission, tagged with the reference returned to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub reference: Uuid,
    pub name: String,
    pub email: String,
    pub company_size: CompanySize,
    pub message: String,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    is_valid_email(&normalized).then_some(normalized)
}

/// Trim and check a request, assigning a fresh reference.
///
/// # Errors
///
/// Returns the first field that fails validation.
pub fn validate(request: ContactRequest) -> Result<ContactSubmission, ContactError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ContactError::MissingName);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ContactError::NameTooLong);
    }
    let email = normalize_email(&request.email).ok_or(ContactError::InvalidEmail)?;
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ContactError::MissingMessage);
    }
    if message.chars().count() > MAX_MESSAGE_LEN {
        return Err(ContactError::MessageTooLong);
    }
    Ok(ContactSubmission {
        reference: Uuid::new_v4(),
        name: name.to_owned(),
        email,
        company_size: request.company_size,
        message: message.to_owned(),
    })
}

#[must_use]
pub fn subject_line(submission: &ContactSubmission) -> String {
    format!("DevHire sales inquiry from {} ({})", submission.name, submission.company_size.as_str())
}

#[must_use]
pub fn render_notification(submission: &ContactSubmission) -> String {
    fill_template(CONTACT_TEMPLATE, |key| match key {
        "NAME" => Some(escape_html(&submission.name)),
        "EMAIL" => Some(escape_html(&submission.email)),
        "COMPANY_SIZE" => Some(submission.company_size.label().to_owned()),
        "MESSAGE" => Some(escape_html(&submission.message)),
        "REFERENCE" => Some(submission.reference.to_string()),
        _ => None,
    })
}

/// Substitute `{{KEY}}` placeholders in one pass over `template`.
///
/// Substituted values are never rescanned, so visitor text containing
/// `{{...}}` stays literal. Unknown keys are left as written.
fn fill_template(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match value(key) {
            Some(filled) => out.push_str(&filled),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
