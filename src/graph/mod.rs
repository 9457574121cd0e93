//! Waypoint visibility graph.
//!
//! - [`WaypointGraph`]: Delaunay candidate edges over waypoints, start and end
//! - [`VisibilityFilter`]: drops candidates that cross a wall
//! - [`NeighboursCache`]: the filtered adjacency, rebuilt after mutations

mod neighbours;
mod visibility;
mod waypoints;

pub use neighbours::{NeighboursCache, NeighboursMap, build_neighbours};
pub use visibility::VisibilityFilter;
pub use waypoints::{Endpoint, WaypointGraph};
