mod config;
mod handler;
mod logger;
mod transform;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use clap::Parser;

use crate::config::Config;
use grayscale_core::SizeCatalog;

/// リクエスト間で共有する不変の状態
#[derive(Clone)]
pub struct AppState {
    pub catalog: SizeCatalog,
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/size-options", get(handler::size_options))
        .route("/process-image", post(handler::process_image))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let config = Config::parse();
    let state = AppState {
        catalog: SizeCatalog::default(),
    };
    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        max_upload_bytes = config.max_upload_bytes,
        "grayscale-processor listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
