//! Fluent API for building AdjacencyGraph instances.

use crate::types::{NodeId, TraversalResult};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Edges are validated when the graph is built, so nodes and edges can be
/// declared in any order.
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a node.
    pub fn add_node(&mut self, id: &str) -> &mut Self {
        self.nodes.push(id.to_string());
        self
    }

    /// Declare several nodes.
    pub fn add_nodes(&mut self, ids: &[&str]) -> &mut Self {
        self.nodes.extend(ids.iter().map(|id| id.to_string()));
        self
    }

    /// Add an undirected edge between two declared nodes.
    pub fn link(&mut self, a: &str, b: &str) -> &mut Self {
        self.edges.push((a.to_string(), b.to_string()));
        self
    }

    /// Build the final AdjacencyGraph.
    pub fn build(self) -> TraversalResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::new();
        for id in &self.nodes {
            graph.add_node(id);
        }
        for (a, b) in &self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
