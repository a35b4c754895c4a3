use server::app;
use server::config;

use std::sync::Arc;

use anyhow::Context;
use chess_core::{load_book, OpeningClassifier};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    tracing::info!("Loading opening book from {}...", config.openings_path.display());
    let book = load_book(&config.openings_path).with_context(|| {
        format!("Failed to load opening book from {}", config.openings_path.display())
    })?;
    tracing::info!("Loaded opening book: {} positions", book.len());

    let classifier = Arc::new(OpeningClassifier::new(Arc::new(book)));
    let app = app::build_router(classifier, &config)?;

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
