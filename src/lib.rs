pub mod config;
pub mod email;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::future::Future;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::SendGridMailer;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;
use crate::submission::recaptcha::RecaptchaVerifier;

pub fn build_app(config: Config) -> Router {
    let index = ServeFile::new(config.static_dir.join("index.html"));
    let assets = ServeDir::new(&config.static_dir);
    let max_body_size = config.max_body_size;

    let recaptcha = config.recaptcha.as_ref().and_then(|rc| {
        match RecaptchaVerifier::new(rc) {
            Ok(verifier) => {
                tracing::info!("reCAPTCHA verification enabled");
                Some(verifier)
            }
            Err(e) => {
                tracing::warn!("reCAPTCHA verification not available: {e}");
                None
            }
        }
    });

    let mailer = match config.sendgrid.as_ref() {
        Some(sg) => match SendGridMailer::new(sg) {
            Ok(mailer) => {
                tracing::info!("SendGrid confirmation emails enabled");
                Some(mailer)
            }
            Err(e) => {
                tracing::warn!("SendGrid not available: {e}");
                None
            }
        },
        None => {
            tracing::warn!("SendGrid not configured; confirmation emails disabled");
            None
        }
    };

    let state: SharedState = Arc::new(AppState {
        store: SubmissionStore::open(&config.data_file),
        config,
        recaptcha,
        mailer,
    });

    Router::new()
        .merge(routes::api_routes())
        .route_service("/", index)
        .route("/health", axum::routing::get(health))
        .fallback_service(assets)
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// Serve until `shutdown` resolves. Requests already in flight, including
/// a submission between its load and save, complete before this returns.
pub async fn serve(
    listener: TcpListener,
    config: Config,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let data_file = config.data_file.clone();
    let app = build_app(config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(data_file = %data_file.display(), "Intake stopped, submissions file closed");
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}
