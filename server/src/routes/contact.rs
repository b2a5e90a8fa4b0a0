//! `POST /api/contact`: sales inquiries from the landing page modal.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a JSON body with an `ok` flag so the form can show the
//! server's reason inline. Delivery failures are logged with the submission
//! reference and reported to the visitor without upstream details.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use client::net::types::{ContactReceipt, ContactRejection, ContactRequest};

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingName
        | ContactError::NameTooLong
        | ContactError::InvalidEmail
        | ContactError::MissingMessage
        | ContactError::MessageTooLong => StatusCode::BAD_REQUEST,
        ContactError::Delivery(_) => StatusCode::BAD_GATEWAY,
    }
}

fn reject(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ContactRejection { ok: false, error: error.into() })).into_response()
}

pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
    let client_ip = remote.ip();
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(client = %client_ip, error = %rejection, "malformed contact body");
            return reject(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let submission = match contact::validate(request) {
        Ok(submission) => submission,
        Err(e) => return reject(contact_error_to_status(&e), e.to_string()),
    };

    // Only well-formed submissions count toward the client's budget.
    if let Err(e) = state.rate_limiter.check_and_record(client_ip) {
        tracing::warn!(client = %client_ip, error = %e, "contact submission rate limited");
        return reject(StatusCode::TOO_MANY_REQUESTS, e.to_string());
    }

    if let Err(e) = state.mailer.deliver(&submission).await {
        tracing::error!(reference = %submission.reference, error = %e, "contact delivery failed");
        return reject(contact_error_to_status(&e), "could not deliver your message, please email us directly");
    }

    tracing::info!(
        reference = %submission.reference,
        company_size = submission.company_size.as_str(),
        transport = state.mailer.transport(),
        "contact submission accepted"
    );
    (StatusCode::OK, Json(ContactReceipt { ok: true, reference: submission.reference })).into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
