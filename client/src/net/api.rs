//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed submission
//! only changes the form's status line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactReceipt, ContactRequest};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, server_error: Option<&str>) -> String {
    match (status, server_error) {
        (429, _) => "too many messages, please try again in a minute".to_owned(),
        (_, Some(reason)) if !reason.trim().is_empty() => reason.trim().to_owned(),
        _ => format!("contact request failed: {status}"),
    }
}

/// Send the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server rejects the
/// submission, or the response body cannot be parsed.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<super::types::ContactRejection>().await.ok();
            return Err(contact_failed_message(resp.status(), body.as_ref().map(|b| b.error.as_str())));
        }
        let receipt: ContactReceipt = resp.json().await.map_err(|e| e.to_string())?;
        if !receipt.ok {
            return Err("contact request failed".to_owned());
        }
        Ok(receipt)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
