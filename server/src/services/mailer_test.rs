use super::*;
use crate::state::test_helpers;

#[test]
fn missing_mail_config_falls_back_to_log() {
    assert_eq!(from_config(None).transport(), "log");
}

#[test]
fn mail_config_selects_resend() {
    let config = MailConfig {
        resend_api_key: "re_test".to_owned(),
        from: "DevHire <site@devhire.com>".to_owned(),
        inbox: "sales@devhire.com".to_owned(),
    };
    assert_eq!(from_config(Some(&config)).transport(), "resend");
}

#[tokio::test]
async fn log_mailer_always_accepts() {
    let submission = test_helpers::dummy_submission();
    assert_eq!(LogMailer.deliver(&submission).await, Ok(()));
}
