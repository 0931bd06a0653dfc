//! Testing utilities for mastermind workspace
//!
//! Shared fixtures for mind maps and their JSON forms.

#![allow(missing_docs)]

use mastermind_core::{MindMap, MindMapNode};
use serde_json::{json, Value};

pub fn target_market_forest() -> Vec<MindMapNode> {
    vec![MindMapNode::new(
        1,
        "Target Market",
        vec![
            MindMapNode::leaf(2, "Athletes"),
            MindMapNode::leaf(3, "Beginners"),
        ],
    )]
}

pub fn create_test_mind_map(idea: &str) -> MindMap {
    MindMap::new(idea, target_market_forest())
}

pub fn target_market_json(idea: &str) -> Value {
    json!({
        "idea": idea,
        "nodes": [{
            "id": 1,
            "title": "Target Market",
            "children": [
                { "id": 2, "title": "Athletes", "children": [] },
                { "id": 3, "title": "Beginners", "children": [] }
            ]
        }]
    })
}

/// JSON that parses but is not a mind map (node missing `children`)
pub fn malformed_mind_map_json() -> Value {
    json!({
        "idea": "broken",
        "nodes": [{ "id": 1, "title": "No children" }]
    })
}
