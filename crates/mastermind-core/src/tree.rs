//! Forest traversal
//!
//! Every query here is a pure function over a borrowed forest and is built on
//! a single depth-first pre-order walk. The walk keeps an explicit stack, so
//! deep trees never exhaust the call stack during a walk or when dropped.

use crate::model::{MindMapNode, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One step of a pre-order walk
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// The visited node
    pub node: &'a MindMapNode,
    /// Parent node, `None` for roots
    pub parent: Option<&'a MindMapNode>,
    /// Distance from the root (roots are level 0)
    pub level: usize,
    /// Position among siblings
    pub order_index: usize,
}

/// Depth-first pre-order iterator over a forest
///
/// Roots are visited in order; each node is yielded before any of its
/// descendants, and siblings keep their order.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> PreOrder<'a> {
    /// Start a walk over the given forest
    #[must_use]
    pub fn new(forest: &'a [MindMapNode]) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_siblings(forest, None, 0);
        walk
    }

    fn push_siblings(
        &mut self,
        siblings: &'a [MindMapNode],
        parent: Option<&'a MindMapNode>,
        level: usize,
    ) {
        // Reversed so the first sibling is popped first
        self.stack.extend(
            siblings
                .iter()
                .enumerate()
                .rev()
                .map(|(order_index, node)| Visit {
                    node,
                    parent,
                    level,
                    order_index,
                }),
        );
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        self.push_siblings(visit.node.children(), Some(visit.node), visit.level + 1);
        Some(visit)
    }
}

/// Walk a forest in pre-order
#[inline]
#[must_use]
pub fn pre_order(forest: &[MindMapNode]) -> PreOrder<'_> {
    PreOrder::new(forest)
}

/// Find the first node in pre-order whose id matches
///
/// Duplicate ids are not rejected: the earliest pre-order occurrence wins.
#[must_use]
pub fn find(forest: &[MindMapNode], id: NodeId) -> Option<&MindMapNode> {
    pre_order(forest)
        .map(|visit| visit.node)
        .find(|node| node.id() == id)
}

/// Collect every title in pre-order
#[must_use]
pub fn flatten(forest: &[MindMapNode]) -> Vec<String> {
    pre_order(forest)
        .map(|visit| visit.node.title().to_owned())
        .collect()
}

/// Total number of nodes across all trees
#[must_use]
pub fn node_count(forest: &[MindMapNode]) -> usize {
    pre_order(forest).count()
}

/// Number of levels in the deepest tree
#[must_use]
pub fn depth(forest: &[MindMapNode]) -> usize {
    pre_order(forest)
        .map(|visit| visit.level + 1)
        .max()
        .unwrap_or(0)
}

/// Flat relational row for one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node identifier
    pub id: NodeId,
    /// Display label
    pub title: String,
    /// Parent identifier, `None` for roots
    pub parent: Option<NodeId>,
    /// Distance from the root
    pub level: usize,
    /// Position among siblings
    pub order_index: usize,
}

/// Outline the forest as pre-order rows
///
/// Parents always precede their children in the output.
#[must_use]
pub fn records(forest: &[MindMapNode]) -> Vec<NodeRecord> {
    pre_order(forest)
        .map(|visit| NodeRecord {
            id: visit.node.id(),
            title: visit.node.title().to_owned(),
            parent: visit.parent.map(MindMapNode::id),
            level: visit.level,
            order_index: visit.order_index,
        })
        .collect()
}

/// Ids that occur more than once
///
/// Each offending id is reported once, in the order its second occurrence
/// is reached.
#[must_use]
pub fn duplicate_ids(forest: &[MindMapNode]) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for visit in pre_order(forest) {
        let id = visit.node.id();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }

    duplicates
}
