//! In-memory undirected graph backed by ordered adjacency sets.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;

use crate::types::{NodeId, TraversalError, TraversalResult};

use super::GraphModel;

/// Summary counts for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of undirected edges.
    pub edges: usize,
    /// Number of connected components.
    pub components: usize,
    /// Largest node degree (0 for an empty graph).
    pub max_degree: usize,
}

/// Undirected graph with string node ids.
///
/// Adjacency is stored in both directions, in ordered sets, so neighbor
/// iteration is always ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl AdjacencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Endpoints are added as nodes.
    pub fn from_edges(edges: &[(&str, &str)]) -> TraversalResult<Self> {
        let mut graph = Self::new();
        for &(a, b) in edges {
            graph.add_node(a);
            graph.add_node(b);
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Add a node. Returns false if it was already present.
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.adjacency.contains_key(id) {
            return false;
        }
        self.adjacency.insert(id.to_string(), BTreeSet::new());
        true
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// Returns `Ok(false)` if the edge already existed.
    pub fn add_edge(&mut self, a: &str, b: &str) -> TraversalResult<bool> {
        if a == b {
            return Err(TraversalError::SelfEdge(a.to_string()));
        }
        if !self.adjacency.contains_key(a) {
            return Err(TraversalError::NodeNotFound(a.to_string()));
        }
        if !self.adjacency.contains_key(b) {
            return Err(TraversalError::NodeNotFound(b.to_string()));
        }

        let inserted = self
            .adjacency
            .get_mut(a)
            .map(|set| set.insert(b.to_string()))
            .unwrap_or(false);
        if let Some(set) = self.adjacency.get_mut(b) {
            set.insert(a.to_string());
        }
        Ok(inserted)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Whether an edge joins `a` and `b`.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .map(|set| set.contains(b))
            .unwrap_or(false)
    }

    /// Degree of a node (0 for unknown nodes).
    pub fn degree(&self, id: &str) -> usize {
        self.adjacency.get(id).map(BTreeSet::len).unwrap_or(0)
    }

    /// Largest degree in the graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Iterate over (node, neighbors) pairs in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<NodeId>)> {
        self.adjacency.iter().map(|(id, set)| (id.as_str(), set))
    }

    /// Connected components. Each component is sorted; components are
    /// ordered by their smallest member.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut components = Vec::new();

        for root in self.adjacency.keys() {
            if seen.contains(root.as_str()) {
                continue;
            }
            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            seen.insert(root.as_str());
            queue.push_back(root.as_str());

            while let Some(current) = queue.pop_front() {
                component.push(current.to_string());
                if let Some(neighbors) = self.adjacency.get(current) {
                    for neighbor in neighbors {
                        if seen.insert(neighbor.as_str()) {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }

            component.sort();
            components.push(component);
        }

        components
    }

    /// Whether the graph has exactly one component. An empty graph is not
    /// connected.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() == 1
    }

    /// Node, edge, component and degree counts.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.adjacency.len(),
            edges: self.edge_count(),
            components: self.connected_components().len(),
            max_degree: self.max_degree(),
        }
    }
}

impl GraphModel for AdjacencyGraph {
    fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    fn neighbors(&self, id: &str) -> Vec<NodeId> {
        self.adjacency
            .get(id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.adjacency.keys().cloned().collect()
    }
}
