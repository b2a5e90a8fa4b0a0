#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Local development reads secrets from .env; production sets real env vars.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let leptos_options = leptos::prelude::get_configuration(None)
        .expect("leptos configuration")
        .leptos_options;

    let mailer = services::mailer::from_config(config.mail.as_ref());
    if config.mail.is_none() {
        tracing::warn!("RESEND_API_KEY not set; contact submissions will only be logged");
    }
    tracing::info!(transport = mailer.transport(), "contact mailer initialized");

    let rate_limiter = rate_limit::RateLimiter::with_config(config.rate_limit);
    let state = state::AppState::new(mailer, rate_limiter);

    let images_dir = config
        .images_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()).join("images"));
    let addr = config.bind_addr(leptos_options.site_addr);

    let app = routes::leptos_app(state, leptos_options, images_dir);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "devhire listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
