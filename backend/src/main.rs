use dotenvy::dotenv;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use anyhow::Context;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod error;
mod config {
    pub mod relay_config;
}
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod api {
    pub mod mailer;
}
mod utils {
    pub mod email_templates;
}

use api::mailer::{Mailer, ResendMailer};
use config::relay_config::RelayConfig;
use handlers::contact_handlers;

pub struct AppState {
    config: RelayConfig,
    mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    pub fn from_config(config: RelayConfig) -> Self {
        let mailer = config
            .resend_api_key
            .as_deref()
            .map(|key| Arc::new(ResendMailer::new(key)) as Arc<dyn Mailer>);
        Self { config, mailer }
    }
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origin = match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(_)) => {
            warn!("FRONTEND_URL is not a valid origin, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.frontend_url.as_deref());

    Router::new()
        .route("/api/health", get(contact_handlers::health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RelayConfig::from_env();
    if config.resend_api_key.is_none() {
        warn!("RESEND_API_KEY is not set, contact submissions will be refused");
    }
    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState::from_config(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
