mod api;
mod config;
mod review;
mod sentiment;
mod storage;

use crate::api::AppState;
use crate::config::AppConfig;
use crate::sentiment::VaderAnalyzer;
use crate::storage::{CsvDataset, ReviewStore};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Review Sentiment API Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Dataset: {:?}", config.storage.dataset_path);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Initialize sentiment analyzer
    info!("🧠 Initializing sentiment analyzer...");
    let analyzer = VaderAnalyzer::new();
    info!("✅ Sentiment analyzer ready");

    // Seed the review store
    info!("💾 Loading review dataset...");
    let seed = CsvDataset::new(&config.storage.dataset_path).load()?;
    let review_store = Arc::new(ReviewStore::new(seed));
    info!("✅ Review store ready ({} reviews)", review_store.len().await);

    // Create application state
    let state = AppState {
        review_store,
        sentiment: Arc::new(analyzer),
    };

    let app = api::app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /                 - List reviews with sentiment");
    info!("   POST /                 - Add new review");
    info!("   GET  /health           - Health check");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
