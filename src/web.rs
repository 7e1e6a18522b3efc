use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api;
use crate::config::ServerConfig;
use crate::engine::WeatherEngine;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn app(engine: Arc<WeatherEngine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .with_state(engine)
}

/// Serve the admin API until `shutdown` fires
pub async fn run(
    engine: Arc<WeatherEngine>,
    config: &ServerConfig,
    mut shutdown: watch::Receiver<()>,
) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind admin server to {addr}"))?;
    tracing::info!("Admin server running at http://{}", addr);

    axum::serve(listener, app(engine))
        .with_graceful_shutdown(async move {
            let _ = shutdown.changed().await;
        })
        .await
        .context("Admin server failed")
}
