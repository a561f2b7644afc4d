//! C&G Corp Site Server
//!
//! Serves the compiled WASM bundle and its assets. Client routes that have
//! no file on disk get `index.html` so the frontend router can take over;
//! paths the site does not know get the same shell with a 404 status.

pub mod config;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{health_check, spa_fallback};
use crate::state::AppState;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let files = ServeDir::new(state.static_dir.as_path())
        .fallback(get(spa_fallback).with_state(state));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}
