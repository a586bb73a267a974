//! Algorithm selection: a closed set of traversal variants behind one trait.

use serde::Serialize;

use crate::graph::GraphModel;
use crate::types::{TraversalError, TraversalResult};

use super::{BreadthFirstEngine, DepthFirstEngine, StepLog};

/// The available traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Stack-based depth-first search.
    DepthFirst,
    /// Queue-based breadth-first search.
    BreadthFirst,
}

impl Algorithm {
    /// Return the short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    /// Return the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
        }
    }

    /// Name of the frontier structure.
    pub fn frontier_name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "stack",
            Self::BreadthFirst => "queue",
        }
    }

    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth_first" | "depthfirst" => Some(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthfirst" => Some(Self::BreadthFirst),
            _ => None,
        }
    }

    /// Parse an algorithm name, failing with `UnknownAlgorithm`.
    pub fn parse(name: &str) -> TraversalResult<Self> {
        Self::from_name(name).ok_or_else(|| TraversalError::UnknownAlgorithm(name.to_string()))
    }
}

/// Shared capability of every traversal variant.
pub trait TraversalEngine {
    /// Which algorithm this engine runs.
    fn algorithm(&self) -> Algorithm;

    /// Evaluate a complete run and return its step log.
    ///
    /// Every call starts from a clean state.
    fn run(&self, start: &str, target: Option<&str>) -> StepLog;
}

/// A traversal engine chosen at runtime.
pub enum Traversal<'g, G: GraphModel + ?Sized> {
    /// Stack-based search.
    DepthFirst(DepthFirstEngine<'g, G>),
    /// Queue-based search.
    BreadthFirst(BreadthFirstEngine<'g, G>),
}

impl<'g, G: GraphModel + ?Sized> Traversal<'g, G> {
    /// Create the engine for `algorithm` over `graph`.
    pub fn new(algorithm: Algorithm, graph: &'g G) -> Self {
        match algorithm {
            Algorithm::DepthFirst => Self::DepthFirst(DepthFirstEngine::new(graph)),
            Algorithm::BreadthFirst => Self::BreadthFirst(BreadthFirstEngine::new(graph)),
        }
    }
}

impl<G: GraphModel + ?Sized> TraversalEngine for Traversal<'_, G> {
    fn algorithm(&self) -> Algorithm {
        match self {
            Self::DepthFirst(_) => Algorithm::DepthFirst,
            Self::BreadthFirst(_) => Algorithm::BreadthFirst,
        }
    }

    fn run(&self, start: &str, target: Option<&str>) -> StepLog {
        match self {
            Self::DepthFirst(engine) => engine.run(start, target),
            Self::BreadthFirst(engine) => engine.run(start, target),
        }
    }
}
