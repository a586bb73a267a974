//! Step snapshots: the unit of replay.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::NodeId;

/// The kind of transition a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// A node was taken off the frontier and finalized.
    Visit,
    /// New nodes were pushed onto the stack or appended to the queue.
    FrontierUpdate,
    /// The frontier ran dry. Always the last step of its run.
    Complete,
    /// The run could not start. Always the only step of its run.
    Error,
}

impl StepKind {
    /// Return a human-readable name for this step kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Visit => "visit",
            Self::FrontierUpdate => "frontier_update",
            Self::Complete => "complete",
            Self::Error => "error",
        }
    }

    /// Parse a step kind from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "visit" => Some(Self::Visit),
            "frontier_update" | "frontierupdate" => Some(Self::FrontierUpdate),
            "complete" => Some(Self::Complete),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Breadth-first search tree: depth and parent of every discovered node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchTree {
    /// Distance (edge count) from the start node.
    pub depth: BTreeMap<NodeId, u32>,
    /// Tree parent; `None` for the start node.
    pub parent: BTreeMap<NodeId, Option<NodeId>>,
}

impl SearchTree {
    /// Create a tree rooted at `root` (depth 0, no parent).
    pub fn rooted_at(root: &str) -> Self {
        let mut tree = Self::default();
        tree.depth.insert(root.to_string(), 0);
        tree.parent.insert(root.to_string(), None);
        tree
    }

    /// Attach `child` under `parent`. Returns the child's depth.
    ///
    /// The parent must already be in the tree.
    pub fn attach(&mut self, child: &str, parent: &str) -> u32 {
        let depth = self.depth.get(parent).map_or(0, |d| d + 1);
        self.depth.insert(child.to_string(), depth);
        self.parent
            .insert(child.to_string(), Some(parent.to_string()));
        depth
    }

    /// Whether `node` has been discovered.
    pub fn contains(&self, node: &str) -> bool {
        self.depth.contains_key(node)
    }

    /// Depth of a node, if discovered.
    pub fn depth_of(&self, node: &str) -> Option<u32> {
        self.depth.get(node).copied()
    }

    /// Tree parent of a node. `None` for the root and for unknown nodes.
    pub fn parent_of(&self, node: &str) -> Option<&str> {
        self.parent.get(node).and_then(|p| p.as_deref())
    }

    /// Path from the root to `node` following parent pointers.
    pub fn path_to(&self, node: &str) -> Option<Vec<NodeId>> {
        if !self.contains(node) {
            return None;
        }
        let mut path = vec![node.to_string()];
        let mut current = node;
        while let Some(parent) = self.parent_of(current) {
            path.push(parent.to_string());
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// All nodes at exactly depth `depth`, ascending.
    pub fn nodes_at_depth(&self, depth: u32) -> Vec<NodeId> {
        self.depth
            .iter()
            .filter(|&(_, &d)| d == depth)
            .map(|(node, _)| node.clone())
            .collect()
    }

    /// Number of `nodes` per depth. Nodes missing from the tree are skipped.
    pub fn depth_counts<'n>(
        &self,
        nodes: impl IntoIterator<Item = &'n NodeId>,
    ) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for d in nodes.into_iter().filter_map(|n| self.depth_of(n)) {
            *counts.entry(d).or_insert(0) += 1;
        }
        counts
    }

    /// (parent, child) pairs of the tree.
    pub fn tree_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.parent
            .iter()
            .filter_map(|(child, parent)| {
                parent.as_ref().map(|p| (p.clone(), child.clone()))
            })
            .collect()
    }
}

/// One immutable snapshot of the search at a discrete transition.
///
/// Every field is owned: a step never aliases the engine's working state,
/// and cloning a step yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Position in the step log (0-based).
    pub index: usize,
    /// What happened.
    pub kind: StepKind,
    /// The node being visited. Only set on `Visit` steps.
    pub current_node: Option<NodeId>,
    /// Nodes finalized so far.
    pub visited: BTreeSet<NodeId>,
    /// Nodes finalized so far, in finalization order.
    pub visit_order: Vec<NodeId>,
    /// Stack (bottom first) or queue (front first) content.
    pub frontier: Vec<NodeId>,
    /// Nodes pushed/enqueued by this step. Only set on `FrontierUpdate` steps.
    pub added: Vec<NodeId>,
    /// Breadth-first search tree. `None` for depth-first runs.
    pub tree: Option<SearchTree>,
    /// Set on the visit of the requested target.
    pub found_target: bool,
    /// Display text.
    pub message: String,
}

impl Step {
    /// Whether this step ends its run.
    pub fn is_terminal(&self) -> bool {
        match self.kind {
            StepKind::Complete | StepKind::Error => true,
            StepKind::Visit => self.found_target,
            StepKind::FrontierUpdate => false,
        }
    }

    /// Whether `node` had been finalized when this step was taken.
    pub fn is_visited(&self, node: &str) -> bool {
        self.visited.contains(node)
    }

    /// Depth of `node` at this point (breadth-first runs only).
    pub fn depth_of(&self, node: &str) -> Option<u32> {
        self.tree.as_ref().and_then(|t| t.depth_of(node))
    }
}
