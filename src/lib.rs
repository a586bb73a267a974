//! traversal-replay: replayable graph search.
//!
//! Runs depth-first or breadth-first search over a small undirected graph and
//! records an immutable snapshot at every transition. The resulting step log
//! can be inspected by index, summarized, and played back forward or backward.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    check_connectivity, Algorithm, BreadthFirstEngine, Connectivity, DepthFirstEngine, Outcome,
    Playback, PlaybackState, StepLog, Traversal, TraversalEngine, TraversalStatistics,
};
pub use format::JsonExporter;
pub use graph::{AdjacencyGraph, GraphBuilder, GraphModel, GraphSummary, SampleGraph};
pub use types::{
    NodeId, SearchTree, Step, StepKind, TraversalError, TraversalResult, DEFAULT_SAMPLE,
    DEFAULT_STEP_INTERVAL, MAX_STEP_INTERVAL, MIN_STEP_INTERVAL,
};
