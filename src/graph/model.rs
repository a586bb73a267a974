//! The read-only graph contract consumed by the traversal engines.

use crate::types::NodeId;

/// Read-only, undirected adjacency structure.
///
/// Implementations must return neighbors in ascending lexicographic order.
/// Visit order is only reproducible because of that ordering.
pub trait GraphModel {
    /// Whether `id` is a node of the graph.
    fn has_node(&self, id: &str) -> bool;

    /// Neighbors of `id`, ascending. Empty for unknown nodes.
    fn neighbors(&self, id: &str) -> Vec<NodeId>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// All node ids, ascending.
    fn node_ids(&self) -> Vec<NodeId>;
}

impl<G: GraphModel + ?Sized> GraphModel for &G {
    fn has_node(&self, id: &str) -> bool {
        (**self).has_node(id)
    }

    fn neighbors(&self, id: &str) -> Vec<NodeId> {
        (**self).neighbors(id)
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    fn node_ids(&self) -> Vec<NodeId> {
        (**self).node_ids()
    }
}
