//! Idea webhook client
//!
//! Posts `{"idea": ...}` to the configured endpoint and validates the JSON
//! that comes back. Any failure along the way yields the fallback map.

use crate::config::WebhookConfig;
use crate::error::WebhookError;
use crate::source::MindMapSource;
use async_trait::async_trait;
use mastermind_core::{fallback_mind_map, mind_map_or_fallback, validate_mind_map, MindMap};
use serde::Serialize;
use serde_json::Value;

/// Idea sent by the connection test
pub const PROBE_IDEA: &str = "test connection";

#[derive(Debug, Serialize)]
struct IdeaRequest<'a> {
    idea: &'a str,
}

/// HTTP client for the idea webhook
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookClient {
    /// Create client for the given configuration
    ///
    /// # Errors
    /// Returns `WebhookError::Http` if the HTTP client cannot be built.
    pub fn new(config: WebhookConfig) -> Result<Self, WebhookError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Create client reusing an existing HTTP client
    #[inline]
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, config: WebhookConfig) -> Self {
        Self { http, config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Post the idea and return the raw JSON body
    ///
    /// # Errors
    /// - `WebhookError::Http` on transport failure or timeout
    /// - `WebhookError::Status` on a non-success status
    /// - `WebhookError::Json` if the body is not JSON
    pub async fn fetch(&self, idea: &str) -> Result<Value, WebhookError> {
        tracing::debug!(
            "POST {} (timeout {}ms) idea: {}",
            self.config.url,
            self.config.timeout_ms,
            idea
        );

        let response = self
            .http
            .post(&self.config.url)
            .timeout(self.config.timeout())
            .json(&IdeaRequest { idea })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Generate a mind map, reporting why it failed instead of falling back
    ///
    /// # Errors
    /// Any [`WebhookError`], including `Invalid` for a malformed body.
    pub async fn try_generate(&self, idea: &str) -> Result<MindMap, WebhookError> {
        let value = self.fetch(idea).await?;
        Ok(validate_mind_map(&value)?)
    }
}

#[async_trait]
impl MindMapSource for WebhookClient {
    async fn generate(&self, idea: &str) -> MindMap {
        tracing::info!("Generating mind map for idea: {}", idea);

        match self.fetch(idea).await {
            Ok(value) => {
                let map = mind_map_or_fallback(&value, idea);
                tracing::info!("Mind map ready: {} root nodes", map.nodes().len());
                map
            }
            Err(e) if e.is_unreachable() => {
                tracing::warn!("Webhook unavailable ({}), using fallback data", e);
                fallback_mind_map(idea)
            }
            Err(e) => {
                tracing::warn!("Webhook error: {}, using fallback data", e);
                fallback_mind_map(idea)
            }
        }
    }

    async fn test_connection(&self) -> bool {
        let result = self
            .http
            .post(&self.config.url)
            .timeout(self.config.probe_timeout())
            .json(&IdeaRequest { idea: PROBE_IDEA })
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::info!("Webhook answered probe with status {}", response.status());
                false
            }
            Err(e) => {
                tracing::info!("Webhook not available: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}
