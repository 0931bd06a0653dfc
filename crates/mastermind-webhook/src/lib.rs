//! Mastermind Webhook - mind-map sources
//!
//! Mind maps come from an external idea webhook. This crate provides:
//! - The `MindMapSource` trait callers are handed explicitly
//! - `WebhookClient`, which posts the idea and validates the reply
//! - `StaticSource`, which serves the fallback map offline
//! - `WebhookConfig`, loadable from TOML
//!
//! # Example
//!
//! ```rust,no_run
//! use mastermind_webhook::{MindMapSource, WebhookClient, WebhookConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WebhookClient::new(WebhookConfig::new().with_env_overrides())?;
//! let map = client.generate("AI Gym Coach").await;
//! println!("{} topics", map.flatten().len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod source;

pub use client::{WebhookClient, PROBE_IDEA};
pub use config::{WebhookConfig, DEFAULT_WEBHOOK_URL, URL_ENV};
pub use error::{ConfigError, WebhookError};
pub use source::{MindMapSource, StaticSource};
