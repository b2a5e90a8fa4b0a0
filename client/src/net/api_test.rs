use super::*;

#[test]
fn contact_endpoint_path() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

#[test]
fn failed_message_prefers_server_reason() {
    assert_eq!(contact_failed_message(400, Some(" invalid email ")), "invalid email");
}

#[test]
fn failed_message_falls_back_to_status() {
    assert_eq!(contact_failed_message(502, None), "contact request failed: 502");
    assert_eq!(contact_failed_message(500, Some("  ")), "contact request failed: 500");
}

#[test]
fn failed_message_explains_rate_limit() {
    assert!(contact_failed_message(429, Some("rate limited")).contains("try again"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_contact_is_unavailable_outside_browser() {
    use crate::net::types::CompanySize;

    let request = ContactRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        company_size: CompanySize::Small,
        message: "hi".to_owned(),
    };
    let result = futures::executor::block_on(submit_contact(&request));
    assert_eq!(result, Err("not available on server".to_owned()));
}
