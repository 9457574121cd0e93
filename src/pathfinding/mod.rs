//! Path search and smoothing.
//!
//! Provides:
//! - Dijkstra and A* over the visibility graph
//! - Catmull-Rom smoothing with domain re-validation

mod search;
mod smoothing;
mod types;

pub use search::find_path;
pub use smoothing::{PathSmoother, SmoothingConfig, catmull_rom, find_collisions};
pub use types::{GeneratedPath, SearchAlgorithm, Trajectory};
