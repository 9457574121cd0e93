//! Filtered adjacency of the waypoint graph.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::core::Coord2D;

use super::visibility::VisibilityFilter;
use super::waypoints::WaypointGraph;

/// Vertex -> visible neighbours
pub type NeighboursMap = BTreeMap<Coord2D, BTreeSet<Coord2D>>;

/// Keep only the candidate edges the filter accepts.
///
/// Every graph vertex gets an entry, isolated ones included.
pub fn build_neighbours(graph: &WaypointGraph, filter: &VisibilityFilter<'_>) -> NeighboursMap {
    let mut map: NeighboursMap = graph
        .vertices()
        .into_iter()
        .map(|v| (v, BTreeSet::new()))
        .collect();

    let candidates = graph.candidate_edges();
    let mut accepted = 0;
    for &(u, v) in &candidates {
        if filter.is_visible(u, v) {
            map.entry(u).or_default().insert(v);
            map.entry(v).or_default().insert(u);
            accepted += 1;
        }
    }

    debug!(
        "[Neighbours] {}/{} candidate edges visible over {} vertices",
        accepted,
        candidates.len(),
        map.len()
    );
    map
}

/// Rebuild-on-demand cache of the neighbours map.
///
/// Any mutation of the waypoint graph or domain calls [`invalidate`]; the
/// next reader rebuilds.
///
/// [`invalidate`]: NeighboursCache::invalidate
#[derive(Clone, Debug, Default)]
pub struct NeighboursCache {
    cached: Option<NeighboursMap>,
    rebuilds: usize,
}

impl NeighboursCache {
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_dirty(&self) -> bool {
        self.cached.is_none()
    }

    /// Number of rebuilds so far
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Cached map, rebuilt with `build` if dirty
    pub fn get_or_rebuild(&mut self, build: impl FnOnce() -> NeighboursMap) -> &NeighboursMap {
        if self.cached.is_none() {
            self.rebuilds += 1;
        }
        self.cached.get_or_insert_with(build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::trace_loops;
    use crate::domain::RoomDomain;
    use crate::graph::Endpoint;
    use crate::raster::{ClassGrid, PixelClass};

    #[test]
    fn test_two_vertex_room() {
        let grid = ClassGrid::uniform(10, 10, PixelClass::Inside);
        let borders = trace_loops(&grid, PixelClass::is_navigable);
        let domain = RoomDomain::build(&borders).unwrap();
        let mut graph = WaypointGraph::new();
        let start = Coord2D::new(0, 0);
        let end = Coord2D::new(9, 9);
        graph.set_endpoint(Endpoint::Start, start, &domain);
        graph.set_endpoint(Endpoint::End, end, &domain);

        let filter = VisibilityFilter::new(&domain, &borders);
        let map = build_neighbours(&graph, &filter);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&start], BTreeSet::from([end]));
        assert_eq!(map[&end], BTreeSet::from([start]));
    }

    #[test]
    fn test_cache_rebuilds_only_when_dirty() {
        let mut cache = NeighboursCache::default();
        assert!(cache.is_dirty());
        cache.get_or_rebuild(NeighboursMap::new);
        cache.get_or_rebuild(|| panic!("clean cache must not rebuild"));
        assert_eq!(cache.rebuilds(), 1);
        cache.invalidate();
        assert!(cache.is_dirty());
        cache.get_or_rebuild(NeighboursMap::new);
        assert_eq!(cache.rebuilds(), 2);
    }
}
