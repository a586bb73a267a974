//! Aggregate statistics over a step log.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::NodeId;

use super::{Algorithm, StepLog};

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalStatistics {
    /// Algorithm that produced the run.
    pub algorithm: Algorithm,
    /// Nodes in the graph.
    pub total_nodes: usize,
    /// Nodes visited by the run.
    pub visited_nodes: usize,
    /// Nodes never visited.
    pub unvisited_nodes: usize,
    /// `visited / total * 100`, 0 for an empty graph.
    pub completion_rate: f64,
    /// Steps in the log.
    pub total_steps: usize,
    /// Final visit order.
    pub visit_order: Vec<NodeId>,
    /// Deepest level visited (breadth-first runs only).
    pub max_depth: Option<u32>,
    /// Visited nodes per level (breadth-first runs only).
    pub depth_counts: Option<BTreeMap<u32, usize>>,
}

impl TraversalStatistics {
    /// Compute statistics from the terminal step of `log`.
    pub fn from_log(log: &StepLog) -> Self {
        let total_nodes = log.total_nodes();
        let visited_nodes = log.terminal().map(|s| s.visited.len()).unwrap_or(0);
        let completion_rate = if total_nodes > 0 {
            visited_nodes as f64 / total_nodes as f64 * 100.0
        } else {
            0.0
        };

        let (max_depth, depth_counts) = match (log.algorithm(), log.tree()) {
            (Algorithm::BreadthFirst, Some(tree)) => {
                let counts = tree.depth_counts(log.visit_order());
                let deepest = counts.keys().next_back().copied().unwrap_or(0);
                (Some(deepest), Some(counts))
            }
            (Algorithm::BreadthFirst, None) => (Some(0), Some(BTreeMap::new())),
            (Algorithm::DepthFirst, _) => (None, None),
        };

        Self {
            algorithm: log.algorithm(),
            total_nodes,
            visited_nodes,
            unvisited_nodes: total_nodes.saturating_sub(visited_nodes),
            completion_rate,
            total_steps: log.len(),
            visit_order: log.visit_order().to_vec(),
            max_depth,
            depth_counts,
        }
    }
}
