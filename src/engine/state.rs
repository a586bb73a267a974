//! Per-run working state shared by both engines.

use std::collections::{BTreeSet, VecDeque};

use crate::types::{NodeId, SearchTree, Step, StepKind};

use super::{Algorithm, Outcome, StepLog};

/// Mutable state of one traversal run.
///
/// Created fresh inside every `run` call and consumed into the resulting
/// [`StepLog`]. Steps receive clones of the fields, never references.
pub(crate) struct TraversalState {
    algorithm: Algorithm,
    visited: BTreeSet<NodeId>,
    visit_order: Vec<NodeId>,
    frontier: VecDeque<NodeId>,
    tree: Option<SearchTree>,
    steps: Vec<Step>,
}

impl TraversalState {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            visited: BTreeSet::new(),
            visit_order: Vec::new(),
            frontier: VecDeque::new(),
            tree: None,
            steps: Vec::new(),
        }
    }

    /// State that also tracks a breadth-first search tree.
    pub(crate) fn with_tree(algorithm: Algorithm, tree: SearchTree) -> Self {
        Self {
            tree: Some(tree),
            ..Self::new(algorithm)
        }
    }

    pub(crate) fn is_visited(&self, node: &str) -> bool {
        self.visited.contains(node)
    }

    /// Mark `node` finalized. Returns false if it already was.
    pub(crate) fn finalize(&mut self, node: &str) -> bool {
        if !self.visited.insert(node.to_string()) {
            return false;
        }
        self.visit_order.push(node.to_string());
        true
    }

    /// Append to the back of the frontier (stack top / queue tail).
    pub(crate) fn push(&mut self, node: NodeId) {
        self.frontier.push_back(node);
    }

    /// Pop the stack top.
    pub(crate) fn pop_back(&mut self) -> Option<NodeId> {
        self.frontier.pop_back()
    }

    /// Dequeue the queue head.
    pub(crate) fn pop_front(&mut self) -> Option<NodeId> {
        self.frontier.pop_front()
    }

    pub(crate) fn tree_mut(&mut self) -> Option<&mut SearchTree> {
        self.tree.as_mut()
    }

    pub(crate) fn depth_of(&self, node: &str) -> Option<u32> {
        self.tree.as_ref().and_then(|t| t.depth_of(node))
    }

    /// Snapshot the current state as a new step.
    pub(crate) fn record(
        &mut self,
        kind: StepKind,
        current_node: Option<&str>,
        added: Vec<NodeId>,
        found_target: bool,
        message: String,
    ) {
        let index = self.steps.len();
        log::trace!(
            "{} step {}: {} ({})",
            self.algorithm.label(),
            index,
            kind.name(),
            message
        );
        self.steps.push(Step {
            index,
            kind,
            current_node: current_node.map(str::to_string),
            visited: self.visited.clone(),
            visit_order: self.visit_order.clone(),
            frontier: self.frontier.iter().cloned().collect(),
            added,
            tree: self.tree.clone(),
            found_target,
            message,
        });
    }

    /// Freeze the recorded steps into a log.
    pub(crate) fn into_log(
        self,
        start: &str,
        target: Option<&str>,
        total_nodes: usize,
        outcome: Outcome,
    ) -> StepLog {
        log::debug!(
            "{} run from '{}' finished ({:?}): {} steps, {} of {} nodes visited",
            self.algorithm.label(),
            start,
            outcome,
            self.steps.len(),
            self.visited.len(),
            total_nodes
        );
        StepLog::new(
            self.algorithm,
            start,
            target,
            total_nodes,
            outcome,
            self.steps,
        )
    }
}
