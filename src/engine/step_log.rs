//! The materialized record of one traversal run.

use serde::Serialize;

use crate::graph::GraphModel;
use crate::types::{NodeId, SearchTree, Step, StepKind, TraversalError, TraversalResult};

use super::{Algorithm, Playback, TraversalStatistics};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The target was visited; the last step is its visit.
    TargetFound,
    /// The frontier ran dry; the last step is `Complete`.
    Exhausted,
    /// The start node was missing; the only step is `Error`.
    StartNodeNotFound,
}

/// Complete, ordered, immutable record of the steps of one run.
///
/// # Invariants
/// - `steps[i].index == i`.
/// - The log is never empty and its last step is terminal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepLog {
    algorithm: Algorithm,
    start: NodeId,
    target: Option<NodeId>,
    total_nodes: usize,
    outcome: Outcome,
    steps: Vec<Step>,
}

impl StepLog {
    pub(crate) fn new(
        algorithm: Algorithm,
        start: &str,
        target: Option<&str>,
        total_nodes: usize,
        outcome: Outcome,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            algorithm,
            start: start.to_string(),
            target: target.map(str::to_string),
            total_nodes,
            outcome,
            steps,
        }
    }

    /// Handle the runs that end before the first visit.
    ///
    /// An empty graph yields a lone `Complete` step; a start node missing
    /// from a non-empty graph yields a lone `Error` step.
    pub(crate) fn preflight<G: GraphModel + ?Sized>(
        algorithm: Algorithm,
        graph: &G,
        start: &str,
        target: Option<&str>,
    ) -> Option<Self> {
        let total_nodes = graph.node_count();
        let (kind, outcome, message) = if total_nodes == 0 {
            (
                StepKind::Complete,
                Outcome::Exhausted,
                "Graph is empty, nothing to search".to_string(),
            )
        } else if !graph.has_node(start) {
            log::warn!("{} run aborted: start node '{}' not found", algorithm.label(), start);
            (
                StepKind::Error,
                Outcome::StartNodeNotFound,
                TraversalError::StartNodeNotFound(start.to_string()).to_string(),
            )
        } else {
            return None;
        };

        let step = Step {
            index: 0,
            kind,
            current_node: None,
            visited: Default::default(),
            visit_order: Vec::new(),
            frontier: Vec::new(),
            added: Vec::new(),
            tree: None,
            found_target: false,
            message,
        };
        Some(Self::new(
            algorithm,
            start,
            target,
            total_nodes,
            outcome,
            vec![step],
        ))
    }

    /// The algorithm that produced this log.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The requested start node.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The requested target node, if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Number of nodes in the searched graph.
    pub fn total_nodes(&self) -> usize {
        self.total_nodes
    }

    /// How the run ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the log holds no steps. Never true for logs built by an engine.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index`.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Step at `index`, failing with `StepOutOfRange`.
    pub fn step(&self, index: usize) -> TraversalResult<&Step> {
        self.steps.get(index).ok_or(TraversalError::StepOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    /// All steps in order.
    pub fn all(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// The last step.
    pub fn terminal(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Whether the run stopped on its target.
    pub fn found_target(&self) -> bool {
        self.outcome == Outcome::TargetFound
    }

    /// The engine-level error of this run, if any.
    pub fn error(&self) -> Option<TraversalError> {
        match self.outcome {
            Outcome::StartNodeNotFound => {
                Some(TraversalError::StartNodeNotFound(self.start.clone()))
            }
            _ => None,
        }
    }

    /// Turn an `Error` log into an `Err`.
    pub fn into_result(self) -> TraversalResult<Self> {
        match self.error() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }

    /// Final visit order.
    pub fn visit_order(&self) -> &[NodeId] {
        self.terminal()
            .map(|s| s.visit_order.as_slice())
            .unwrap_or(&[])
    }

    /// 1-based position of `node` in the visit order.
    pub fn visit_time_of(&self, node: &str) -> Option<usize> {
        self.visit_order()
            .iter()
            .position(|n| n == node)
            .map(|i| i + 1)
    }

    /// Whether `node` was visited during the run.
    pub fn is_visited(&self, node: &str) -> bool {
        self.terminal().map(|s| s.is_visited(node)).unwrap_or(false)
    }

    /// Final search tree (breadth-first runs only).
    pub fn tree(&self) -> Option<&SearchTree> {
        self.terminal().and_then(|s| s.tree.as_ref())
    }

    /// Path from the start to `node`.
    ///
    /// Breadth-first runs return the shortest path. Depth-first runs return
    /// the visit order up to `node`, which is a trace, not a shortest path.
    pub fn path_to(&self, node: &str) -> Option<Vec<NodeId>> {
        match self.algorithm {
            Algorithm::BreadthFirst => self.shortest_path_to(node),
            Algorithm::DepthFirst => {
                let order = self.visit_order();
                let end = order.iter().position(|n| n == node)?;
                Some(order[..=end].to_vec())
            }
        }
    }

    /// Shortest path from the start to `node` (breadth-first runs only).
    pub fn shortest_path_to(&self, node: &str) -> Option<Vec<NodeId>> {
        self.tree()?.path_to(node)
    }

    /// Edge distance from the start to `node` (breadth-first runs only).
    pub fn distance_to(&self, node: &str) -> Option<u32> {
        self.tree()?.depth_of(node)
    }

    /// Nodes discovered at distance `depth` (breadth-first runs only).
    pub fn nodes_at_depth(&self, depth: u32) -> Vec<NodeId> {
        self.tree()
            .map(|t| t.nodes_at_depth(depth))
            .unwrap_or_default()
    }

    /// Search-tree parent of `node` (breadth-first runs only).
    pub fn parent_of(&self, node: &str) -> Option<&str> {
        self.tree()?.parent_of(node)
    }

    /// (parent, child) edges of the search tree (breadth-first runs only).
    pub fn tree_edges(&self) -> Vec<(NodeId, NodeId)> {
        self.tree().map(SearchTree::tree_edges).unwrap_or_default()
    }

    /// Aggregate statistics for the run.
    pub fn statistics(&self) -> TraversalStatistics {
        TraversalStatistics::from_log(self)
    }

    /// A playback cursor over this log.
    pub fn playback(&self) -> Playback<'_> {
        Playback::new(self)
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
