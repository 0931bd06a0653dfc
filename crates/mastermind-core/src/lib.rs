//! Mastermind Core - mind-map model and pure operations
//!
//! A business idea is explored as a forest of labeled nodes. This crate
//! provides:
//! - The mind-map data model
//! - Pre-order traversal: lookup by id, flatten to titles, outlines
//! - Day-by-day learning schedules
//! - Validation of untrusted JSON with a literal fallback map
//!
//! # Example
//!
//! ```rust
//! use mastermind_core::{fallback_mind_map, partition_by_day, NodeId};
//!
//! let map = fallback_mind_map("AI Gym Coach");
//! assert_eq!(map.find(NodeId(3)).map(|n| n.title()), Some("Beginners"));
//!
//! let plans = partition_by_day(&map.flatten(), 7);
//! assert_eq!(plans.len(), 5);
//! ```

// Core modules
pub mod error;
pub mod fallback;
pub mod model;
pub mod schedule;
pub mod tree;
pub mod validate;

// Re-exports for convenience
pub use error::ValidationError;
pub use fallback::{fallback_mind_map, mind_map_or_fallback, FALLBACK_IDEA};
pub use model::{MindMap, MindMapNode, MindMapSummary, NodeId};
pub use schedule::{
    clamp_learning_days, learning_schedule, learning_topics, partition_by_day, DayPlan,
    DEFAULT_LEARNING_DAYS, DEFAULT_TOPICS, MAX_LEARNING_DAYS, MIN_LEARNING_DAYS,
};
pub use tree::{
    depth, duplicate_ids, find, flatten, node_count, pre_order, records, NodeRecord, PreOrder,
    Visit,
};
pub use validate::{validate_mind_map, validate_node};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with mind maps
    pub use crate::{
        fallback_mind_map, find, flatten, mind_map_or_fallback, partition_by_day, DayPlan,
        MindMap, MindMapNode, NodeId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
