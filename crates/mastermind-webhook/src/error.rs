//! Error types for mind-map sources

use mastermind_core::ValidationError;
use std::path::PathBuf;

/// Webhook call failures
///
/// `MindMapSource::generate` swallows these into the fallback map;
/// `WebhookClient::try_generate` exposes them.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// Transport failure, including timeouts and refused connections
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("webhook returned status {0}")]
    Status(u16),

    /// Body is not JSON
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Body is JSON but not a mind map
    #[error("invalid mind map: {0}")]
    Invalid(#[from] ValidationError),
}

impl WebhookError {
    /// Check if the request never reached a responding endpoint
    #[inline]
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect() || e.is_timeout())
    }
}

/// Configuration loading failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid configuration
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create IO error for a path
    #[inline]
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
