//! Mind-map data model
//!
//! A mind map is an idea label plus a forest of labeled nodes:
//! - `NodeId` is caller-assigned and never generated here
//! - `MindMapNode` owns its children, so trees cannot form cycles
//! - `MindMap` is built once and only ever replaced wholesale

use crate::tree::{self, NodeRecord};
use serde::{Deserialize, Serialize};

/// Caller-assigned node identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Raw integer value
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled node with ordered children
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MindMapNode {
    id: NodeId,
    title: String,
    children: Vec<MindMapNode>,
}

impl MindMapNode {
    /// Create node with the given children
    #[inline]
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, children: Vec<MindMapNode>) -> Self {
        Self {
            id: NodeId(id),
            title: title.into(),
            children,
        }
    }

    /// Create node without children
    #[inline]
    #[must_use]
    pub fn leaf(id: u64, title: impl Into<String>) -> Self {
        Self::new(id, title, Vec::new())
    }

    /// With an additional child appended after the existing ones
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: MindMapNode) -> Self {
        self.children.push(child);
        self
    }

    /// Node identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ordered children
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[MindMapNode] {
        &self.children
    }

    /// Check if node has no children
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Subtrees are unlinked onto a heap stack so dropping a deep chain does not
// recurse once per level.
impl Drop for MindMapNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// An idea and the forest exploring it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMap {
    idea: String,
    nodes: Vec<MindMapNode>,
}

impl MindMap {
    /// Create mind map from an idea and its root nodes
    #[inline]
    #[must_use]
    pub fn new(idea: impl Into<String>, nodes: Vec<MindMapNode>) -> Self {
        Self {
            idea: idea.into(),
            nodes,
        }
    }

    /// Originating idea
    #[inline]
    #[must_use]
    pub fn idea(&self) -> &str {
        &self.idea
    }

    /// Root forest
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[MindMapNode] {
        &self.nodes
    }

    /// Copy of this map carrying a different idea label
    #[must_use]
    pub fn with_idea(mut self, idea: impl Into<String>) -> Self {
        self.idea = idea.into();
        self
    }

    /// First node in pre-order with the given id
    #[inline]
    #[must_use]
    pub fn find(&self, id: NodeId) -> Option<&MindMapNode> {
        tree::find(&self.nodes, id)
    }

    /// All titles in pre-order
    #[inline]
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        tree::flatten(&self.nodes)
    }

    /// Relational outline of the forest
    #[inline]
    #[must_use]
    pub fn records(&self) -> Vec<NodeRecord> {
        tree::records(&self.nodes)
    }

    /// Size and shape summary
    #[must_use]
    pub fn summary(&self) -> MindMapSummary {
        MindMapSummary {
            idea: self.idea.clone(),
            node_count: tree::node_count(&self.nodes),
            root_count: self.nodes.len(),
            depth: tree::depth(&self.nodes),
        }
    }
}

/// Shape of a mind map without its contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MindMapSummary {
    /// Originating idea
    pub idea: String,
    /// Total nodes across all trees
    pub node_count: usize,
    /// Number of trees in the forest
    pub root_count: usize,
    /// Levels in the deepest tree (0 when empty)
    pub depth: usize,
}
