//! All data types for the traversal-replay library.

pub mod error;
pub mod step;

use std::time::Duration;

pub use error::{TraversalError, TraversalResult};
pub use step::{SearchTree, Step, StepKind};

/// Node identifier. Opaque, compared and ordered as a string.
pub type NodeId = String;

/// Default delay between two steps during playback.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(1000);

/// Fastest allowed playback interval.
pub const MIN_STEP_INTERVAL: Duration = Duration::from_millis(100);

/// Slowest allowed playback interval.
pub const MAX_STEP_INTERVAL: Duration = Duration::from_millis(3000);

/// Sample graph used when none is specified.
pub const DEFAULT_SAMPLE: &str = "sample";
