//! Waypoint graph over {waypoints, start, end}.
//!
//! An unconstrained Delaunay triangulation whose edges are the candidate
//! neighbour pairs. Vertex identity is the pixel coordinate; membership is
//! answered from a hash set, and spade is only asked to locate a vertex
//! when one has to be removed.

use std::collections::{BTreeSet, HashSet};

use log::{trace, warn};
use spade::{DelaunayTriangulation, Point2, Triangulation};

use crate::core::{Coord2D, PathPoint, Triangle};
use crate::domain::RoomDomain;

type Dt = DelaunayTriangulation<Point2<f64>>;

#[inline]
fn to_point(coord: Coord2D) -> Point2<f64> {
    Point2::new(f64::from(coord.x), f64::from(coord.y))
}

#[inline]
fn to_coord(point: Point2<f64>) -> Coord2D {
    Coord2D::new(point.x.round() as i32, point.y.round() as i32)
}

/// Which endpoint of the path is being moved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// Candidate graph for path search
#[derive(Default)]
pub struct WaypointGraph {
    dt: Dt,
    waypoints: BTreeSet<Coord2D>,
    vertices: HashSet<Coord2D>,
    start: Option<Coord2D>,
    end: Option<Coord2D>,
}

impl WaypointGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<Coord2D> {
        self.start
    }

    pub fn end(&self) -> Option<Coord2D> {
        self.end
    }

    /// Waypoints in coordinate order (excludes start and end)
    pub fn waypoints(&self) -> impl Iterator<Item = Coord2D> + '_ {
        self.waypoints.iter().copied()
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// True for waypoints, start and end
    pub fn is_vertex(&self, coord: Coord2D) -> bool {
        self.vertices.contains(&coord)
    }

    /// All graph vertices in coordinate order
    pub fn vertices(&self) -> BTreeSet<Coord2D> {
        self.vertices.iter().copied().collect()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn is_endpoint(&self, coord: Coord2D) -> bool {
        self.start == Some(coord) || self.end == Some(coord)
    }

    fn add_vertex(&mut self, coord: Coord2D) -> bool {
        match self.dt.insert(to_point(coord)) {
            Ok(_) => {
                self.vertices.insert(coord);
                true
            }
            Err(e) => {
                warn!("[Graph] Failed to insert vertex {}: {:?}", coord, e);
                false
            }
        }
    }

    fn remove_vertex(&mut self, coord: Coord2D) {
        self.vertices.remove(&coord);
        match self.dt.locate_vertex(to_point(coord)).map(|v| v.fix()) {
            Some(handle) => {
                self.dt.remove(handle);
            }
            None => {
                warn!("[Graph] Vertex {} missing from triangulation, rebuilding", coord);
                self.rebuild();
            }
        }
    }

    /// Rebuild the triangulation from the vertex bookkeeping
    fn rebuild(&mut self) {
        let mut coords: Vec<Coord2D> = self.waypoints.iter().copied().collect();
        coords.extend(self.start);
        coords.extend(self.end);

        self.dt = Dt::new();
        self.vertices.clear();
        for coord in coords {
            self.add_vertex(coord);
        }
    }

    /// Add a waypoint.
    ///
    /// Fails without mutation when `coord` is the start or end, is already a
    /// vertex, or lies outside the domain.
    pub fn insert(&mut self, coord: Coord2D, domain: &RoomDomain) -> bool {
        if self.is_endpoint(coord) || self.vertices.contains(&coord) {
            trace!("[Graph] Rejecting waypoint {}: already a vertex", coord);
            return false;
        }
        if !domain.contains_coord(coord) {
            trace!("[Graph] Rejecting waypoint {}: outside domain", coord);
            return false;
        }
        if !self.add_vertex(coord) {
            return false;
        }
        self.waypoints.insert(coord);
        true
    }

    /// Remove a waypoint. Fails for start, end and unknown coordinates.
    pub fn remove(&mut self, coord: Coord2D) -> bool {
        if self.is_endpoint(coord) || !self.waypoints.remove(&coord) {
            return false;
        }
        self.remove_vertex(coord);
        true
    }

    /// Drop every waypoint, keeping start and end
    pub fn clear(&mut self) {
        self.waypoints.clear();
        self.rebuild();
    }

    /// Move the start or end.
    ///
    /// Unchanged targets succeed without mutation. Fails when the target is
    /// the other endpoint, a waypoint, or outside the domain.
    pub fn set_endpoint(&mut self, which: Endpoint, coord: Coord2D, domain: &RoomDomain) -> bool {
        let (current, other) = match which {
            Endpoint::Start => (self.start, self.end),
            Endpoint::End => (self.end, self.start),
        };

        if current == Some(coord) {
            return true;
        }
        if other == Some(coord) || self.waypoints.contains(&coord) {
            trace!("[Graph] Rejecting {:?} at {}: occupied", which, coord);
            return false;
        }
        if !domain.contains_coord(coord) {
            trace!("[Graph] Rejecting {:?} at {}: outside domain", which, coord);
            return false;
        }

        let old = match which {
            Endpoint::Start => self.start.replace(coord),
            Endpoint::End => self.end.replace(coord),
        };
        if let Some(old) = old {
            self.remove_vertex(old);
        }
        self.add_vertex(coord)
    }

    /// Delaunay edges as coordinate pairs, each reported once
    pub fn candidate_edges(&self) -> Vec<(Coord2D, Coord2D)> {
        self.dt
            .undirected_edges()
            .map(|edge| {
                let [a, b] = edge.vertices();
                (to_coord(a.position()), to_coord(b.position()))
            })
            .collect()
    }

    /// Faces of the waypoint triangulation, for rendering
    pub fn triangles(&self) -> Vec<Triangle> {
        self.dt
            .inner_faces()
            .map(|face| {
                let [a, b, c] = face.positions();
                Triangle::new(
                    PathPoint::new(a.x, a.y),
                    PathPoint::new(b.x, b.y),
                    PathPoint::new(c.x, c.y),
                )
            })
            .collect()
    }
}

impl std::fmt::Debug for WaypointGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WaypointGraph")
            .field("waypoints", &self.waypoints.len())
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}
