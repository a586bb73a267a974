//! Traversal engines and everything built on their step logs.

pub mod algorithm;
pub mod breadth_first;
pub mod connectivity;
pub mod depth_first;
pub mod playback;
mod state;
pub mod statistics;
pub mod step_log;

pub use algorithm::{Algorithm, Traversal, TraversalEngine};
pub use breadth_first::BreadthFirstEngine;
pub use connectivity::{check_connectivity, Connectivity};
pub use depth_first::DepthFirstEngine;
pub use playback::{Playback, PlaybackState};
pub use statistics::TraversalStatistics;
pub use step_log::{Outcome, StepLog};
