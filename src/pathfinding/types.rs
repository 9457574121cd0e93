//! Path search result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Coord2D, PathPoint};

/// Search strategy for [`find_path`](super::find_path)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAlgorithm {
    /// Uniform-cost search
    #[default]
    Dijkstra,
    /// Euclidean-guided search
    AStar,
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Dijkstra => write!(f, "Dijkstra"),
            SearchAlgorithm::AStar => write!(f, "A*"),
        }
    }
}

/// Result of a path search
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedPath {
    /// Start to end, or the best-effort backtrace from end when unreachable
    pub points: Vec<Coord2D>,
    /// Total Euclidean length (infinite when unreachable)
    pub cost: f64,
    /// Nodes closed during the search
    pub nodes_expanded: usize,
}

impl GeneratedPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path actually starts at `start`.
    ///
    /// An unreachable end yields a path that does not, so this is the
    /// "no path" check.
    pub fn reaches(&self, start: Coord2D) -> bool {
        self.points.first() == Some(&start) && self.points.len() >= 2
    }

    /// Sum of segment lengths along the points
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

/// Smoothed path and the samples that left the domain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    /// Dense Catmull-Rom samples
    pub points: Vec<PathPoint>,
    /// Samples failing the point-in-domain test (advisory)
    pub collisions: Vec<PathPoint>,
}

impl Trajectory {
    pub fn is_collision_free(&self) -> bool {
        self.collisions.is_empty()
    }
}
