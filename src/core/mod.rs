//! Core geometric types shared by every stage of the planner.

mod coord;
mod geometry;

pub use coord::{Coord2D, PathPoint};
pub use geometry::{Edge, Polygon, SegmentIntersection, Triangle, segment_intersection};
