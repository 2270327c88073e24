//! Startup configuration
//!
//! Read once from the process environment at entry and passed into the
//! client explicitly; nothing reads the environment after startup.

use anyhow::Context;

/// Default listen port when PORT is unset or unparseable
const DEFAULT_PORT: u16 = 5000;

/// Process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// NewsAPI credential, embedded in every upstream URL
    pub api_key: String,
    /// Listen port
    pub port: u16,
}

impl Config {
    /// Read configuration from the environment
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("API_KEY")
            .context("API_KEY must be set (NewsAPI credential)")?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { api_key, port })
    }
}
