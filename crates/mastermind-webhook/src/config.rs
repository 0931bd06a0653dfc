//! Webhook configuration
//!
//! Loaded from TOML, with an environment override for the endpoint URL.
//! Missing keys take their defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default idea webhook endpoint
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook-test/mindmap";

/// Environment variable overriding the endpoint URL
pub const URL_ENV: &str = "MASTERMIND_WEBHOOK_URL";

/// Idea webhook configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Endpoint receiving `{"idea": ...}` posts
    pub url: String,
    /// Timeout for mind-map generation in milliseconds
    pub timeout_ms: u64,
    /// Timeout for the connection test in milliseconds
    pub probe_timeout_ms: u64,
}

impl WebhookConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With endpoint URL
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// With generation timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = duration_ms(timeout);
        self
    }

    /// With connection test timeout
    #[inline]
    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout_ms = duration_ms(timeout);
        self
    }

    /// Generation timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Connection test timeout
    #[inline]
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Toml` if it is not valid configuration
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_url_override(std::env::var(URL_ENV).ok())
    }

    /// Replace the URL when an override is present and not blank
    #[must_use]
    pub fn with_url_override(self, url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => self.with_url(url),
            _ => self,
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEBHOOK_URL.to_string(),
            timeout_ms: 10_000,
            probe_timeout_ms: 5_000,
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WebhookConfig::new();
        assert_eq!(config.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.probe_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn builders() {
        let config = WebhookConfig::new()
            .with_url("http://example.test/hook")
            .with_timeout(Duration::from_millis(250))
            .with_probe_timeout(Duration::from_secs(1));
        assert_eq!(config.url, "http://example.test/hook");
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.probe_timeout_ms, 1_000);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = WebhookConfig::from_toml_str("timeout_ms = 3000\n").unwrap();
        assert_eq!(config.timeout_ms, 3_000);
        assert_eq!(config.url, DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let result = WebhookConfig::from_toml_str("timeout_ms = \"soon\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn url_override() {
        let base = WebhookConfig::new();
        let changed = base.clone().with_url_override(Some("http://other/hook".into()));
        assert_eq!(changed.url, "http://other/hook");
        assert_eq!(base.clone().with_url_override(Some("  ".into())), base);
        assert_eq!(base.clone().with_url_override(None), base);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mastermind.toml");
        std::fs::write(
            &path,
            "url = \"http://n8n.internal/hook\"\nprobe_timeout_ms = 750\n",
        )
        .unwrap();

        let config = WebhookConfig::load(&path).unwrap();
        assert_eq!(config.url, "http://n8n.internal/hook");
        assert_eq!(config.probe_timeout(), Duration::from_millis(750));
        assert_eq!(config.timeout_ms, 10_000);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = WebhookConfig::load("/nonexistent/mastermind.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
