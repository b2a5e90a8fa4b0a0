use super::*;

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        company_size: CompanySize::Small,
        message: message.to_owned(),
    }
}

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Ada@Example.COM "), Some("ada@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed() {
    for bad in ["", "ada", "@example.com", "ada@", "ada@localhost", "a@b@c.com", "ada@.com", "ada@example.", "a@b."] {
        assert_eq!(normalize_email(bad), None, "{bad}");
    }
    let long = format!("{}@example.com", "a".repeat(client::state::contact::MAX_EMAIL_LEN));
    assert_eq!(normalize_email(&long), None);
}

#[test]
fn validate_trims_fields_and_assigns_reference() {
    let a = validate(request("  Ada Lovelace ", "ADA@example.com", "  Need 3 engineers.\n")).unwrap();
    assert_eq!(a.name, "Ada Lovelace");
    assert_eq!(a.email, "ada@example.com");
    assert_eq!(a.message, "Need 3 engineers.");
    assert_eq!(a.company_size, CompanySize::Small);

    let b = validate(request("Ada", "ada@example.com", "Hi")).unwrap();
    assert_ne!(a.reference, b.reference);
}

#[test]
fn validate_reports_first_bad_field() {
    assert_eq!(validate(request("  ", "nope", "")), Err(ContactError::MissingName));
    assert_eq!(validate(request("Ada", "nope", "")), Err(ContactError::InvalidEmail));
    assert_eq!(validate(request("Ada", "ada@example.com", " \n ")), Err(ContactError::MissingMessage));
}

#[test]
fn validate_enforces_length_limits() {
    let long_name = "x".repeat(MAX_NAME_LEN + 1);
    assert_eq!(validate(request(&long_name, "ada@example.com", "Hi")), Err(ContactError::NameTooLong));

    let long_message = "x".repeat(MAX_MESSAGE_LEN + 1);
    assert_eq!(validate(request("Ada", "ada@example.com", &long_message)), Err(ContactError::MessageTooLong));

    let max_message = "x".repeat(MAX_MESSAGE_LEN);
    assert!(validate(request("Ada", "ada@example.com", &max_message)).is_ok());
}

#[test]
fn notification_escapes_visitor_input() {
    let submission = validate(request("<b>Eve</b>", "eve@example.com", "Hello & <script>alert(1)</script>")).unwrap();
    let html = render_notification(&submission);

    assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    assert!(html.contains("Hello &amp; &lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("11-50 employees"));
    assert!(html.contains(&submission.reference.to_string()));
    assert!(!html.contains("{{"));
}

#[test]
fn subject_names_sender_and_size() {
    let submission = validate(request("Ada", "ada@example.com", "Hi")).unwrap();
    assert_eq!(subject_line(&submission), "DevHire sales inquiry from Ada (11-50)");
}

#[test]
fn client_and_server_agree_on_email_shape() {
    for candidate in ["a@b.", "a@b.co", "grace@navy", "@x.io", "Ada@Example.com"] {
        assert_eq!(
            normalize_email(candidate).is_some(),
            is_valid_email(candidate.trim()),
            "{candidate}"
        );
    }
}

#[test]
fn placeholder_text_from_visitor_stays_literal() {
    let submission = validate(request("{{MESSAGE}}", "a@b.co", "<script>x</script>")).unwrap();
    let html = render_notification(&submission);

    assert!(html.contains("<strong>Name:</strong> {{MESSAGE}}</p>"));
    assert_eq!(html.matches("&lt;script&gt;x&lt;/script&gt;").count(), 1);
}

#[test]
fn fill_template_keeps_unknown_and_unterminated_placeholders() {
    let filled = fill_template("a {{X}} b {{Y}} c {{Z", |key| (key == "X").then(|| "1".to_owned()));
    assert_eq!(filled, "a 1 b {{Y}} c {{Z");
}
