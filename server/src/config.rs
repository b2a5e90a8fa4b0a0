//! Startup configuration read from environment variables.
//!
//! Mail delivery is optional: without `RESEND_API_KEY` contact submissions
//! are only logged. When the key is present the sender and inbox must be
//! configured too.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::rate_limit::RateLimitConfig;

const DEFAULT_PER_CLIENT_LIMIT: usize = 5;
const DEFAULT_PER_CLIENT_WINDOW_SECS: u64 = 600;
const DEFAULT_GLOBAL_LIMIT: usize = 100;
const DEFAULT_GLOBAL_WINDOW_SECS: u64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required when RESEND_API_KEY is set")]
    MissingMailSetting { var: &'static str },
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub resend_api_key: String,
    pub from: String,
    pub inbox: String,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Overrides the port of Leptos' `site-addr` when set.
    pub port: Option<u16>,
    /// Directory served under `/images`; defaults to `<site-root>/images`.
    pub images_dir: Option<PathBuf>,
    pub mail: Option<MailConfig>,
    pub rate_limit: RateLimitConfig,
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen on `0.0.0.0:PORT` instead of the Leptos site address
    /// - `IMAGES_DIR`: directory for hero/testimonial images
    /// - `RESEND_API_KEY`, `RESEND_FROM`, `CONTACT_INBOX`: contact email delivery
    /// - `CONTACT_RATE_LIMIT_PER_CLIENT` (default 5) per
    ///   `CONTACT_RATE_LIMIT_PER_CLIENT_WINDOW_SECS` (default 600)
    /// - `CONTACT_RATE_LIMIT_GLOBAL` (default 100) per
    ///   `CONTACT_RATE_LIMIT_GLOBAL_WINDOW_SECS` (default 60)
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable numbers or incomplete mail settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_opt::<u16>("PORT", get("PORT"))?;
        let images_dir = get("IMAGES_DIR").map(PathBuf::from);

        let mail = match get("RESEND_API_KEY") {
            Some(resend_api_key) => Some(MailConfig {
                resend_api_key,
                from: get("RESEND_FROM").ok_or(ConfigError::MissingMailSetting { var: "RESEND_FROM" })?,
                inbox: get("CONTACT_INBOX").ok_or(ConfigError::MissingMailSetting { var: "CONTACT_INBOX" })?,
            }),
            None => None,
        };

        let per_client_limit = parse_opt("CONTACT_RATE_LIMIT_PER_CLIENT", get("CONTACT_RATE_LIMIT_PER_CLIENT"))?
            .unwrap_or(DEFAULT_PER_CLIENT_LIMIT);
        let per_client_window_secs = parse_opt(
            "CONTACT_RATE_LIMIT_PER_CLIENT_WINDOW_SECS",
            get("CONTACT_RATE_LIMIT_PER_CLIENT_WINDOW_SECS"),
        )?
        .unwrap_or(DEFAULT_PER_CLIENT_WINDOW_SECS);
        let global_limit =
            parse_opt("CONTACT_RATE_LIMIT_GLOBAL", get("CONTACT_RATE_LIMIT_GLOBAL"))?.unwrap_or(DEFAULT_GLOBAL_LIMIT);
        let global_window_secs =
            parse_opt("CONTACT_RATE_LIMIT_GLOBAL_WINDOW_SECS", get("CONTACT_RATE_LIMIT_GLOBAL_WINDOW_SECS"))?
                .unwrap_or(DEFAULT_GLOBAL_WINDOW_SECS);

        Ok(Self {
            port,
            images_dir,
            mail,
            rate_limit: RateLimitConfig {
                per_client_limit,
                per_client_window: Duration::from_secs(per_client_window_secs),
                global_limit,
                global_window: Duration::from_secs(global_window_secs),
            },
        })
    }

    /// Address to bind: `0.0.0.0:PORT` when `PORT` is set, else `site_addr`.
    #[must_use]
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::from(([0, 0, 0, 0], port)),
            None => site_addr,
        }
    }
}

fn parse_opt<T: std::str::FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }))
        .transpose()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
