//! Application State

use std::path::PathBuf;
use std::sync::Arc;

use site_core::Sitemap;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client routes the frontend build understands
    pub sitemap: Sitemap,

    /// Directory holding `index.html`, the WASM bundle and assets
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(sitemap: Sitemap, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            sitemap,
            static_dir: Arc::new(static_dir.into()),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.sitemap(), config.static_dir.clone())
    }

    /// Location of the HTML shell
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
