//! Admin UI configuration, read from environment variables (and `.env`)

use std::time::Duration;

use catalog_client::ClientConfig;
use catalog_client::config::DEFAULT_BASE_URL;
use shared::models::DEFAULT_LIST_LIMIT;

/// Quiet period before a search is sent
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    /// Products API base URL
    pub api_url: String,
    /// `limit` sent with every list request
    pub list_limit: u32,
    pub search_debounce: Duration,
    /// Per-request timeout in seconds; none unless configured
    pub timeout_secs: Option<u64>,
    /// Directory for the rolling log file; no file logging when unset
    pub log_dir: Option<String>,
    pub log_level: String,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("CATALOG_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            list_limit: env_parse("CATALOG_LIST_LIMIT").unwrap_or(DEFAULT_LIST_LIMIT),
            search_debounce: Duration::from_millis(
                env_parse("CATALOG_SEARCH_DEBOUNCE_MS").unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
            ),
            timeout_secs: env_parse("CATALOG_TIMEOUT_SECS"),
            log_dir: std::env::var("CATALOG_LOG_DIR").ok(),
            log_level: std::env::var("CATALOG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.api_url);
        match self.timeout_secs {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            timeout_secs: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}
