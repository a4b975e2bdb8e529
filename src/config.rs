use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Value of `IS_PROD` that switches production behaviour off. Anything else,
/// including an unset variable, counts as production.
pub const PRODUCTION_DISABLED: &str = "false";

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub graphql_uri: String,
    pub backend_timeout: Duration,

    // Routing policy
    pub is_production: bool,

    // Dictionaries
    pub locales_dir: PathBuf,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Brand and banner GraphQL endpoint
            graphql_uri: std::env::var("GRAPHQL_URI").context("GRAPHQL_URI not set")?,
            backend_timeout: Duration::from_secs(
                std::env::var("BACKEND_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),

            is_production: is_production_flag(std::env::var("IS_PROD").ok().as_deref()),

            locales_dir: std::env::var("LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locales")),

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        })
    }
}

/// Interpret the raw `IS_PROD` value.
pub fn is_production_flag(raw: Option<&str>) -> bool {
    raw != Some(PRODUCTION_DISABLED)
}
