//! Wall occlusion test for candidate edges.
//!
//! A candidate segment between two pixel centers is tested against every
//! border edge. Intersections are gathered per polygon:
//! - collinear overlap of positive length rejects (the edge runs along a wall)
//! - two or more points: the midpoint of each consecutive pair, in discovery
//!   order and wrapping around, must lie inside the domain
//! - a single point rejects unless it is one of the candidate's endpoints
//!
//! Endpoints are put in coordinate order first, so `(u, v)` and `(v, u)`
//! always get the same answer.

use log::trace;

use crate::boundary::corner_point;
use crate::core::{Coord2D, PathPoint, Polygon, SegmentIntersection, segment_intersection};
use crate::domain::RoomDomain;

/// Border polygon prepared for segment tests
struct PreparedPolygon {
    edges: Vec<(PathPoint, PathPoint)>,
    min: PathPoint,
    max: PathPoint,
}

impl PreparedPolygon {
    fn new(polygon: &Polygon) -> Option<Self> {
        let edges: Vec<(PathPoint, PathPoint)> = polygon
            .edges()
            .filter(|e| !e.is_degenerate())
            .map(|e| (corner_point(e.start), corner_point(e.end)))
            .collect();
        if edges.is_empty() {
            return None;
        }

        let mut min = PathPoint::new(f64::INFINITY, f64::INFINITY);
        let mut max = PathPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (a, _) in &edges {
            min.x = min.x.min(a.x);
            min.y = min.y.min(a.y);
            max.x = max.x.max(a.x);
            max.y = max.y.max(a.y);
        }
        Some(Self { edges, min, max })
    }

    #[inline]
    fn overlaps_box(&self, a: PathPoint, b: PathPoint) -> bool {
        a.x.max(b.x) >= self.min.x
            && a.x.min(b.x) <= self.max.x
            && a.y.max(b.y) >= self.min.y
            && a.y.min(b.y) <= self.max.y
    }
}

/// Occlusion filter over the border polygons of a room
pub struct VisibilityFilter<'a> {
    domain: &'a RoomDomain,
    polygons: Vec<PreparedPolygon>,
}

impl<'a> VisibilityFilter<'a> {
    pub fn new(domain: &'a RoomDomain, borders: &[Polygon]) -> Self {
        Self {
            domain,
            polygons: borders.iter().filter_map(PreparedPolygon::new).collect(),
        }
    }

    /// Whether the straight segment between `u` and `v` stays clear of walls.
    pub fn is_visible(&self, u: Coord2D, v: Coord2D) -> bool {
        let (u, v) = if u <= v { (u, v) } else { (v, u) };
        let p1 = u.to_point();
        let p2 = v.to_point();

        for polygon in &self.polygons {
            if !polygon.overlaps_box(p1, p2) {
                continue;
            }

            let mut hits: Vec<PathPoint> = Vec::new();
            for &(q1, q2) in &polygon.edges {
                match segment_intersection(p1, p2, q1, q2) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(hit) => hits.push(hit),
                    SegmentIntersection::Overlap => {
                        trace!("[Visibility] {} - {} runs along a border", u, v);
                        return false;
                    }
                }
            }

            match hits.len() {
                0 => {}
                1 => {
                    if hits[0] != p1 && hits[0] != p2 {
                        trace!("[Visibility] {} - {} grazes a border", u, v);
                        return false;
                    }
                }
                n => {
                    for i in 0..n {
                        let mid = hits[i].midpoint(&hits[(i + 1) % n]);
                        if !self.domain.contains(mid) {
                            trace!(
                                "[Visibility] {} - {} leaves the domain near ({:.2}, {:.2})",
                                u, v, mid.x, mid.y
                            );
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}
