//! Error types for the traversal-replay library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the traversal-replay library.
#[derive(Error, Debug)]
pub enum TraversalError {
    /// The requested start node is not part of the graph.
    #[error("Start node '{0}' does not exist in the graph")]
    StartNodeNotFound(NodeId),

    /// A node referenced by an edge or a query is not part of the graph.
    #[error("Node '{0}' not found")]
    NodeNotFound(NodeId),

    /// Self-loops are not allowed.
    #[error("Self-edge not allowed on node '{0}'")]
    SelfEdge(NodeId),

    /// Step index past the end of a step log.
    #[error("Step index {index} out of range (log has {len} steps)")]
    StepOutOfRange { index: usize, len: usize },

    /// Unrecognized algorithm name.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Unrecognized sample graph name.
    #[error("Unknown sample graph: {0}")]
    UnknownSample(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for traversal-replay operations.
pub type TraversalResult<T> = Result<T, TraversalError>;
