use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::body::to_bytes;
use client::net::types::CompanySize;

use super::*;
use crate::state::test_helpers::{self, FailingMailer, RecordingMailer};

fn remote(last: u8) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::new(IpAddr::V4(Ipv4Addr::new(198, 51, 100, last)), 40_000))
}

fn body(name: &str, email: &str, message: &str) -> Result<Json<ContactRequest>, JsonRejection> {
    Ok(Json(ContactRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        company_size: CompanySize::Large,
        message: message.to_owned(),
    }))
}

async fn json_of(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn contact_error_to_status_maps_validation_to_bad_request() {
    assert_eq!(contact_error_to_status(&ContactError::MissingName), StatusCode::BAD_REQUEST);
    assert_eq!(contact_error_to_status(&ContactError::InvalidEmail), StatusCode::BAD_REQUEST);
    assert_eq!(contact_error_to_status(&ContactError::MessageTooLong), StatusCode::BAD_REQUEST);
}

#[test]
fn contact_error_to_status_maps_delivery_to_bad_gateway() {
    let err = ContactError::Delivery("boom".into());
    assert_eq!(contact_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn valid_submission_is_delivered_and_acknowledged() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_helpers::test_app_state_with_mailer(mailer.clone());

    let response =
        submit_contact(State(state), remote(1), body(" Ada ", "Ada@Example.com", "Need a Rust team.")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_of(response).await;
    assert_eq!(json["ok"], true);
    let delivered = mailer.delivered.lock().unwrap().clone();
    assert_eq!(delivered.len(), 1);
    assert_eq!(json["reference"], delivered[0].reference.to_string());
    assert_eq!(delivered[0].name, "Ada");
    assert_eq!(delivered[0].email, "ada@example.com");
    assert_eq!(delivered[0].company_size, CompanySize::Large);
}

#[tokio::test]
async fn invalid_submission_is_rejected_without_delivery() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = test_helpers::test_app_state_with_mailer(mailer.clone());

    let response = submit_contact(State(state), remote(1), body("Ada", "not-an-email", "Hi")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_of(response).await;
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "invalid email");
    assert!(mailer.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delivery_failure_maps_to_bad_gateway() {
    let state = test_helpers::test_app_state_with_mailer(Arc::new(FailingMailer));

    let response = submit_contact(State(state), remote(1), body("Ada", "ada@example.com", "Hi")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = json_of(response).await;
    assert_eq!(json["ok"], false);
    assert!(!json["error"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn repeated_submissions_from_one_client_are_rate_limited() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState::new(mailer.clone(), test_helpers::test_rate_limiter(2));

    for _ in 0..2 {
        let response = submit_contact(State(state.clone()), remote(7), body("Ada", "ada@example.com", "Hi")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = submit_contact(State(state.clone()), remote(7), body("Ada", "ada@example.com", "Hi")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json_of(response).await["ok"], false);

    let response = submit_contact(State(state), remote(8), body("Bob", "bob@example.com", "Hi")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mailer.delivered.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn invalid_submissions_do_not_use_up_rate_limit() {
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState::new(mailer.clone(), test_helpers::test_rate_limiter(1));

    for _ in 0..3 {
        let response = submit_contact(State(state.clone()), remote(9), body("Ada", "nope", "Hi")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    let response = submit_contact(State(state.clone()), remote(9), body("Ada", "ada@example.com", "Hi")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = submit_contact(State(state), remote(9), body("Ada", "ada@example.com", "Hi")).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(mailer.delivered.lock().unwrap().len(), 1);
}
