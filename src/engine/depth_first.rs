//! Depth-first search with an explicit stack.

use crate::graph::GraphModel;
use crate::types::StepKind;

use super::state::TraversalState;
use super::{Algorithm, Outcome, StepLog, TraversalEngine};

/// Depth-first traversal engine.
///
/// Neighbors are pushed in descending order so that LIFO popping visits
/// them in ascending order. The stack is not de-duplicated: a node may sit
/// on it several times, and stale entries are dropped without a step when
/// popped.
pub struct DepthFirstEngine<'g, G: GraphModel + ?Sized> {
    graph: &'g G,
}

impl<'g, G: GraphModel + ?Sized> DepthFirstEngine<'g, G> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Run the search from `start`, stopping early at `target` if given.
    pub fn run(&self, start: &str, target: Option<&str>) -> StepLog {
        log::debug!("DFS run from '{}' (target: {:?})", start, target);
        if let Some(log) = StepLog::preflight(Algorithm::DepthFirst, self.graph, start, target) {
            return log;
        }

        let total_nodes = self.graph.node_count();
        let mut state = TraversalState::new(Algorithm::DepthFirst);
        state.push(start.to_string());

        while let Some(current) = state.pop_back() {
            if !state.finalize(&current) {
                continue;
            }

            if target == Some(current.as_str()) {
                state.record(
                    StepKind::Visit,
                    Some(current.as_str()),
                    Vec::new(),
                    true,
                    format!("Found target node '{}'", current),
                );
                return state.into_log(start, target, total_nodes, Outcome::TargetFound);
            }
            state.record(
                StepKind::Visit,
                Some(current.as_str()),
                Vec::new(),
                false,
                format!("Visiting node '{}'", current),
            );

            let mut pushed = Vec::new();
            for neighbor in self.graph.neighbors(&current).into_iter().rev() {
                if !state.is_visited(&neighbor) {
                    state.push(neighbor.clone());
                    pushed.push(neighbor);
                }
            }

            if !pushed.is_empty() {
                let message = format!("Pushed onto stack: [{}]", pushed.join(", "));
                state.record(StepKind::FrontierUpdate, None, pushed, false, message);
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

impl<G: GraphModel + ?Sized> TraversalEngine for DepthFirstEngine<'_, G> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn run(&self, start: &str, target: Option<&str>) -> StepLog {
        DepthFirstEngine::run(self, start, target)
    }
}
