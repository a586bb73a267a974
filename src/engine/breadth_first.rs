//! Breadth-first search with an explicit queue.

use std::collections::HashSet;

use crate::graph::GraphModel;
use crate::types::{NodeId, SearchTree, StepKind};

use super::state::TraversalState;
use super::{Algorithm, Outcome, StepLog, TraversalEngine};

/// Breadth-first traversal engine.
///
/// Nodes are marked discovered when enqueued, so the queue never holds a
/// node twice. Depth and parent are fixed at discovery, which makes the
/// recorded search tree a shortest-path tree.
pub struct BreadthFirstEngine<'g, G: GraphModel + ?Sized> {
    graph: &'g G,
}

impl<'g, G: GraphModel + ?Sized> BreadthFirstEngine<'g, G> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Run the search from `start`, stopping early at `target` if given.
    pub fn run(&self, start: &str, target: Option<&str>) -> StepLog {
        log::debug!("BFS run from '{}' (target: {:?})", start, target);
        if let Some(log) = StepLog::preflight(Algorithm::BreadthFirst, self.graph, start, target)
        {
            return log;
        }

        let total_nodes = self.graph.node_count();
        let mut state =
            TraversalState::with_tree(Algorithm::BreadthFirst, SearchTree::rooted_at(start));
        let mut discovered: HashSet<NodeId> = HashSet::new();
        discovered.insert(start.to_string());
        state.push(start.to_string());

        while let Some(current) = state.pop_front() {
            state.finalize(&current);
            let depth = state.depth_of(&current).unwrap_or(0);

            if target == Some(current.as_str()) {
                state.record(
                    StepKind::Visit,
                    Some(current.as_str()),
                    Vec::new(),
                    true,
                    format!("Found target node '{}' (depth {})", current, depth),
                );
                return state.into_log(start, target, total_nodes, Outcome::TargetFound);
            }
            state.record(
                StepKind::Visit,
                Some(current.as_str()),
                Vec::new(),
                false,
                format!("Visiting node '{}' (depth {})", current, depth),
            );

            let mut added = Vec::new();
            for neighbor in self.graph.neighbors(&current) {
                if !discovered.insert(neighbor.clone()) {
                    continue;
                }
                if let Some(tree) = state.tree_mut() {
                    tree.attach(&neighbor, &current);
                }
                state.push(neighbor.clone());
                added.push(neighbor);
            }

            if !added.is_empty() {
                let message = format!("Enqueued neighbors: [{}]", added.join(", "));
                state.record(StepKind::FrontierUpdate, None, added, false, message);
            }
        }

        let found = target.is_some_and(|t| state.is_visited(t));
        state.record(
            StepKind::Complete,
            None,
            Vec::new(),
            found,
            "Search complete".to_string(),
        );
        state.into_log(start, target, total_nodes, Outcome::Exhausted)
    }
}

impl<G: GraphModel + ?Sized> TraversalEngine for BreadthFirstEngine<'_, G> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn run(&self, start: &str, target: Option<&str>) -> StepLog {
        BreadthFirstEngine::run(self, start, target)
    }
}
