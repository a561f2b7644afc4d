//! Server Configuration
//!
//! Read from the process environment (and `.env`, loaded by `main`).

use std::net::SocketAddr;
use std::path::PathBuf;

use site_core::Sitemap;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("BIND_ADDR is not a socket address: {0:?}")]
    InvalidBindAddr(String),

    #[error("ENABLE_AI_AGENT must be true/false, 1/0 or yes/no, got {0:?}")]
    InvalidFlag(String),
}

/// Runtime settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// Treat `/ai-agent` as a known client route
    pub ai_agent: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = addr
            .parse()
            .map_err(|_| ServerError::InvalidBindAddr(addr.clone()))?;

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
            .into();

        let ai_agent = match lookup("ENABLE_AI_AGENT") {
            Some(value) => parse_flag(&value)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            ai_agent,
        })
    }

    pub const fn sitemap(&self) -> Sitemap {
        Sitemap::new(self.ai_agent)
    }

    /// Settings that depend on how the frontend was built
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.ai_agent {
            warnings.push(
                "ENABLE_AI_AGENT is set: /ai-agent answers 200, but the bundle only renders \
                 it when site-web is built with `--features ai-agent`"
                    .to_string(),
            );
        }
        warnings
    }
}

fn parse_flag(value: &str) -> Result<bool, ServerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ServerError::InvalidFlag(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ServerError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert!(!config.ai_agent);
        assert_eq!(config.sitemap(), Sitemap::default());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("STATIC_DIR", "dist"),
            ("ENABLE_AI_AGENT", "Yes"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert!(config.sitemap().ai_agent);
    }

    #[test]
    fn test_flag_values() {
        assert!(parse_flag("1").unwrap());
        assert!(parse_flag("TRUE").unwrap());
        assert!(!parse_flag("no").unwrap());
        assert!(!parse_flag("").unwrap());
        assert!(matches!(parse_flag("maybe"), Err(ServerError::InvalidFlag(_))));
    }

    #[test]
    fn test_ai_agent_flag_warns_about_frontend_feature() {
        assert!(config(&[]).unwrap().startup_warnings().is_empty());

        let warnings = config(&[("ENABLE_AI_AGENT", "1")]).unwrap().startup_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("--features ai-agent"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = config(&[("BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ServerError::InvalidBindAddr(addr) if addr == "localhost"));
    }
}
