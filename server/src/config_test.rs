use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    SiteConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, None);
    assert_eq!(config.images_dir, None);
    assert_eq!(config.mail, None);
    assert_eq!(config.rate_limit.per_client_limit, DEFAULT_PER_CLIENT_LIMIT);
    assert_eq!(config.rate_limit.per_client_window, Duration::from_secs(DEFAULT_PER_CLIENT_WINDOW_SECS));
    assert_eq!(config.rate_limit.global_limit, DEFAULT_GLOBAL_LIMIT);
    assert_eq!(config.rate_limit.global_window, Duration::from_secs(DEFAULT_GLOBAL_WINDOW_SECS));
}

#[test]
fn port_overrides_site_addr() {
    let config = config_from(&[("PORT", "8080")]).unwrap();
    let site: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(config.bind_addr(site), "0.0.0.0:8080".parse::<SocketAddr>().unwrap());

    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind_addr(site), site);
}

#[test]
fn invalid_port_is_reported() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn blank_values_count_as_unset() {
    let config = config_from(&[("PORT", "  "), ("RESEND_API_KEY", "")]).unwrap();
    assert_eq!(config.port, None);
    assert_eq!(config.mail, None);
}

#[test]
fn mail_config_requires_sender_and_inbox() {
    let err = config_from(&[("RESEND_API_KEY", "re_123")]).unwrap_err();
    assert_eq!(err, ConfigError::MissingMailSetting { var: "RESEND_FROM" });

    let err = config_from(&[("RESEND_API_KEY", "re_123"), ("RESEND_FROM", "site@devhire.com")]).unwrap_err();
    assert_eq!(err, ConfigError::MissingMailSetting { var: "CONTACT_INBOX" });
}

#[test]
fn complete_mail_config_is_parsed() {
    let config = config_from(&[
        ("RESEND_API_KEY", "re_123"),
        ("RESEND_FROM", "DevHire <site@devhire.com>"),
        ("CONTACT_INBOX", "sales@devhire.com"),
    ])
    .unwrap();
    assert_eq!(
        config.mail,
        Some(MailConfig {
            resend_api_key: "re_123".to_owned(),
            from: "DevHire <site@devhire.com>".to_owned(),
            inbox: "sales@devhire.com".to_owned(),
        })
    );
}

#[test]
fn rate_limit_overrides() {
    let config = config_from(&[
        ("CONTACT_RATE_LIMIT_PER_CLIENT", "2"),
        ("CONTACT_RATE_LIMIT_PER_CLIENT_WINDOW_SECS", "30"),
        ("CONTACT_RATE_LIMIT_GLOBAL", "10"),
        ("CONTACT_RATE_LIMIT_GLOBAL_WINDOW_SECS", "5"),
    ])
    .unwrap();
    assert_eq!(config.rate_limit.per_client_limit, 2);
    assert_eq!(config.rate_limit.per_client_window, Duration::from_secs(30));
    assert_eq!(config.rate_limit.global_limit, 10);
    assert_eq!(config.rate_limit.global_window, Duration::from_secs(5));
}

#[test]
fn invalid_rate_limit_is_reported() {
    let err = config_from(&[("CONTACT_RATE_LIMIT_GLOBAL", "-1")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "CONTACT_RATE_LIMIT_GLOBAL", value: "-1".to_owned() });
}
