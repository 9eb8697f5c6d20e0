//! Client configuration.
//!
//! The API base URL and request timeout are fixed at client construction.
//! Configuration can be built directly, loaded from the environment
//! (`OPSDESK_API_URL`, `OPSDESK_REQUEST_TIMEOUT_SECS`), or deserialized from
//! a host application's own config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default API base URL for local development backends.
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL the resource paths are joined onto, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from the environment, honoring a `.env` file if
    /// one is present in the working directory.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine; only surface real read errors
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err).context("Failed to load .env file"),
        }

        let mut config = Self::default();
        if let Ok(url) = std::env::var("OPSDESK_API_URL") {
            config.base_url = normalize_base_url(url);
        }
        if let Ok(timeout) = std::env::var("OPSDESK_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout
                .parse()
                .context("OPSDESK_REQUEST_TIMEOUT_SECS must be an integer")?;
        }
        Ok(config)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
