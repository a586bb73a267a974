//! Reachability between two nodes.

use serde::Serialize;

use crate::graph::{AdjacencyGraph, GraphModel};
use crate::types::{NodeId, TraversalError, TraversalResult};

use super::BreadthFirstEngine;

/// Reachability report for a (start, target) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connectivity {
    /// Whether the whole graph is one component.
    pub connected: bool,
    /// Whether target is reachable from start.
    pub path_exists: bool,
    /// A shortest path, when one exists.
    pub shortest_path: Option<Vec<NodeId>>,
    /// Edge count of the shortest path.
    pub distance: Option<u32>,
    /// Number of connected components.
    pub component_count: usize,
    /// Size of the largest component.
    pub largest_component: usize,
}

/// Check whether `target` is reachable from `start`.
pub fn check_connectivity(
    graph: &AdjacencyGraph,
    start: &str,
    target: &str,
) -> TraversalResult<Connectivity> {
    for node in [start, target] {
        if !graph.has_node(node) {
            return Err(TraversalError::NodeNotFound(node.to_string()));
        }
    }

    let log = BreadthFirstEngine::new(graph).run(start, Some(target));
    let shortest_path = if log.found_target() {
        log.shortest_path_to(target)
    } else {
        None
    };
    let distance = shortest_path
        .as_ref()
        .map(|path| path.len().saturating_sub(1) as u32);

    let components = graph.connected_components();
    Ok(Connectivity {
        connected: components.len() == 1,
        path_exists: shortest_path.is_some(),
        shortest_path,
        distance,
        component_count: components.len(),
        largest_component: components.iter().map(Vec::len).max().unwrap_or(0),
    })
}
