//! Graph model: the read-only contract and an in-memory implementation.

pub mod adjacency;
pub mod builder;
pub mod model;
pub mod samples;

pub use adjacency::{AdjacencyGraph, GraphSummary};
pub use builder::GraphBuilder;
pub use model::GraphModel;
pub use samples::SampleGraph;
