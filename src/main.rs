mod config;
mod models;
mod routes;
mod scraper;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::routes::AppState;
use crate::scraper::nyaasi::NyaaFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("anime_torrent_finder=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    crate::scraper::init_http_client(config.http_timeout).context("Failed to create HTTP client")?;

    let state = AppState::new(Arc::new(NyaaFetcher), &config.nyaa_base_url);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    tracing::info!(
        "Listening on {} (searching {})",
        config.bind_address,
        config.nyaa_base_url
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
