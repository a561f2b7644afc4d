//! C&G Corp Site Server
//!
//! Axum-based static host for the Leptos frontend.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_server::{build_router, config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("invalid server configuration")?;
    let state = AppState::from_config(&config);

    for warning in config.startup_warnings() {
        tracing::warn!("⚠ {}", warning);
    }

    if !state.index_path().is_file() {
        tracing::warn!("⚠ {} not found - build the frontend first", state.index_path().display());
        tracing::warn!("  trunk build --release --dist {}", config.static_dir.display());
    }

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 C&G Corp site running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Serving {}", config.static_dir.display());
    tracing::info!("Client routes:");
    for route in config.sitemap().routes() {
        tracing::info!("  {:<14} {}", route.path(), route.title());
    }
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
