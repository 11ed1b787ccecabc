use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:8080/registry";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 1000;
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the registry API (without the `/api` suffix)
    pub api_url: String,
    /// Public URL prefix guests use to open a published registry
    pub share_base_url: String,
    pub search_debounce: Duration,
    pub page_size: u32,
    /// Where native builds keep the wizard draft
    pub draft_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            page_size: DEFAULT_PAGE_SIZE,
            draft_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_url: env::var("REGISTRY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            share_base_url: env::var("REGISTRY_SHARE_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_SHARE_BASE_URL.to_string()),
            search_debounce: Duration::from_millis(
                env::var("REGISTRY_SEARCH_DEBOUNCE_MS")
                    .unwrap_or_else(|_| DEFAULT_SEARCH_DEBOUNCE_MS.to_string())
                    .parse()
                    .context("REGISTRY_SEARCH_DEBOUNCE_MS must be a valid number")?,
            ),
            page_size: env::var("REGISTRY_PAGE_SIZE")
                .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
                .parse()
                .context("REGISTRY_PAGE_SIZE must be a valid number")?,
            draft_path: env::var("REGISTRY_DRAFT_PATH").ok().map(PathBuf::from),
        })
    }

    /// Build configuration from values baked in at compile time.
    ///
    /// Browser builds have no process environment, so the web crate passes
    /// `option_env!` results here.
    pub fn from_build_values(
        api_url: Option<&str>,
        share_base_url: Option<&str>,
        debounce_ms: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url.map(str::to_string).unwrap_or(defaults.api_url),
            share_base_url: share_base_url
                .map(str::to_string)
                .unwrap_or(defaults.share_base_url),
            search_debounce: debounce_ms
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.search_debounce),
            page_size: page_size
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            draft_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_values_fall_back_to_defaults() {
        let config = Config::from_build_values(None, None, Some("not-a-number"), Some("0"));

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.search_debounce, Duration::from_millis(1000));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn build_values_override_defaults() {
        let config = Config::from_build_values(
            Some("https://api.example.com"),
            Some("https://gifts.example.com/r"),
            Some("250"),
            Some("24"),
        );

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.share_base_url, "https://gifts.example.com/r");
        assert_eq!(config.search_debounce, Duration::from_millis(250));
        assert_eq!(config.page_size, 24);
    }
}
