//! HTTP Handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use site_core::Route;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// HTML shell for paths with no file on disk.
///
/// Known client routes answer 200; anything else still gets the shell so
/// the frontend renders its not-found page, but with a 404 status.
pub async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let route = state.sitemap.resolve(uri.path());
    let status = if route == Route::NotFound {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    match tokio::fs::read_to_string(state.index_path()).await {
        Ok(shell) => {
            tracing::debug!(path = %uri.path(), ?route, %status, "serving app shell");
            (status, Html(shell)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", state.index_path().display(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Site bundle is missing").into_response()
        }
    }
}
