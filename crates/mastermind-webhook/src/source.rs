//! Mind-map sources
//!
//! Callers receive a source value explicitly instead of reaching for a
//! process-wide service object.

use async_trait::async_trait;
use mastermind_core::{fallback_mind_map, MindMap};

/// Something that turns an idea into a mind map
#[async_trait]
pub trait MindMapSource: Send + Sync {
    /// Generate a mind map for the idea
    ///
    /// Never fails: sources substitute fallback data when they cannot
    /// produce a well-formed map.
    async fn generate(&self, idea: &str) -> MindMap;

    /// Check whether the source is currently reachable
    async fn test_connection(&self) -> bool;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Offline source serving the fallback map
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

impl StaticSource {
    /// Create static source
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MindMapSource for StaticSource {
    async fn generate(&self, idea: &str) -> MindMap {
        tracing::debug!("Serving fallback mind map for idea: {}", idea);
        fallback_mind_map(idea)
    }

    async fn test_connection(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
