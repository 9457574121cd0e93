//! Planning statistics.

use std::fmt;
use std::time::Instant;

use crate::pathfinding::SearchAlgorithm;

/// Timings of the most recent planning operations (all times in microseconds).
#[derive(Debug, Clone, Default)]
pub struct PlanningStats {
    /// Raster classification, erosion, tracing and domain triangulation (µs).
    pub domain_build_us: u64,
    /// Last random waypoint placement (µs).
    pub scatter_us: u64,
    /// Last neighbours map rebuild (µs).
    pub neighbours_us: u64,
    /// Last path search (µs).
    pub path_search_us: u64,
    /// Last Catmull-Rom interpolation (µs).
    pub smoothing_us: u64,
    /// Last collision re-check of the smoothed path (µs).
    pub collision_check_us: u64,
    /// Algorithm used by the last search.
    pub last_algorithm: Option<SearchAlgorithm>,
    /// Nodes expanded by the last search.
    pub last_nodes_expanded: usize,
}

impl PlanningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time of the last path request (µs).
    pub fn path_total_us(&self) -> u64 {
        self.neighbours_us + self.path_search_us + self.smoothing_us + self.collision_check_us
    }
}

impl fmt::Display for PlanningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Domain build:      {:>8} µs", self.domain_build_us)?;
        writeln!(f, "Waypoint scatter:  {:>8} µs", self.scatter_us)?;
        writeln!(f, "Neighbours:        {:>8} µs", self.neighbours_us)?;
        match self.last_algorithm {
            Some(algorithm) => writeln!(
                f,
                "Path search ({}): {:>8} µs, {} nodes",
                algorithm, self.path_search_us, self.last_nodes_expanded
            )?,
            None => writeln!(f, "Path search:       {:>8} µs", self.path_search_us)?,
        }
        writeln!(f, "Smoothing:         {:>8} µs", self.smoothing_us)?;
        write!(f, "Collision check:   {:>8} µs", self.collision_check_us)
    }
}

/// Microseconds since `start`
#[inline]
pub(crate) fn elapsed_us(start: Instant) -> u64 {
    start.elapsed().as_micros() as u64
}
