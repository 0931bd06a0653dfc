//! Fallback mind map
//!
//! When an external source cannot produce a well-formed map, callers use the
//! literal map defined here, relabelled with the idea they asked about.

use crate::model::{MindMap, MindMapNode};
use crate::validate::validate_mind_map;
use serde_json::Value;

/// Idea label of the fallback map
pub const FALLBACK_IDEA: &str = "AI Gym Coach";

/// The fallback map, relabelled with `idea` unless it is empty
#[must_use]
pub fn fallback_mind_map(idea: &str) -> MindMap {
    let idea = if idea.is_empty() { FALLBACK_IDEA } else { idea };

    MindMap::new(
        idea,
        vec![
            MindMapNode::new(
                1,
                "Target Market",
                vec![
                    MindMapNode::leaf(2, "Athletes"),
                    MindMapNode::leaf(3, "Beginners"),
                ],
            ),
            MindMapNode::new(
                4,
                "Tech Stack",
                vec![
                    MindMapNode::leaf(5, "Machine Learning"),
                    MindMapNode::leaf(6, "Mobile App"),
                ],
            ),
            MindMapNode::new(
                7,
                "Revenue Model",
                vec![
                    MindMapNode::leaf(8, "Subscription"),
                    MindMapNode::leaf(9, "Premium Features"),
                ],
            ),
            MindMapNode::leaf(10, "Marketing Strategy"),
        ],
    )
}

/// Typed map from an untrusted value, or the fallback map for `idea`
///
/// Never fails: a value of the wrong shape is logged and replaced.
#[must_use]
pub fn mind_map_or_fallback(value: &Value, idea: &str) -> MindMap {
    match validate_mind_map(value) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!("Invalid mind map ({}), using fallback data", e);
            fallback_mind_map(idea)
        }
    }
}
