//! Polygons, edges, triangles and segment intersection.

use serde::{Deserialize, Serialize};

use super::coord::{Coord2D, PathPoint};

/// Directed edge of a polygon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub start: Coord2D,
    pub end: Coord2D,
}

impl Edge {
    #[inline]
    pub fn new(start: Coord2D, end: Coord2D) -> Self {
        Self { start, end }
    }

    /// True when both endpoints coincide
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered, implicitly closed vertex loop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Coord2D>,
}

impl Polygon {
    /// Create a polygon from its vertex loop (last vertex connects back to the first)
    pub fn new(vertices: Vec<Coord2D>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Coord2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges of the closed loop, including the closing edge.
    ///
    /// A two-vertex polygon yields the span and its reverse.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Signed area in vertex units (shoelace). Positive for clockwise loops in image space.
    pub fn signed_area(&self) -> f64 {
        let twice: i64 = self
            .edges()
            .map(|e| {
                i64::from(e.start.x) * i64::from(e.end.y) - i64::from(e.end.x) * i64::from(e.start.y)
            })
            .sum();
        twice as f64 * 0.5
    }
}

/// Triangle in pixel space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: PathPoint,
    pub b: PathPoint,
    pub c: PathPoint,
}

impl Triangle {
    pub fn new(a: PathPoint, b: PathPoint, c: PathPoint) -> Self {
        Self { a, b, c }
    }

    pub fn centroid(&self) -> PathPoint {
        PathPoint::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
        )
    }

    pub fn area(&self) -> f64 {
        ((self.b - self.a).cross(&(self.c - self.a)) * 0.5).abs()
    }
}

/// Outcome of intersecting two closed segments
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// Segments do not touch
    None,
    /// Segments meet in exactly one point
    Point(PathPoint),
    /// Segments are collinear and share a piece of positive length
    Overlap,
}

/// Intersect segment `p1-p2` with segment `q1-q2`.
///
/// Parametric cross-product form. Parameter range checks compare numerators
/// against the denominator so half-pixel inputs stay exact. Collinear
/// segments are resolved by projecting `q` onto `p`: a shared piece of
/// positive length is an [`SegmentIntersection::Overlap`], a single shared
/// endpoint is a [`SegmentIntersection::Point`].
pub fn segment_intersection(
    p1: PathPoint,
    p2: PathPoint,
    q1: PathPoint,
    q2: PathPoint,
) -> SegmentIntersection {
    let r = p2 - p1;
    let s = q2 - q1;
    let qp = q1 - p1;
    let denom = r.cross(&s);

    if denom == 0.0 {
        if qp.cross(&r) != 0.0 {
            // Parallel, not collinear
            return SegmentIntersection::None;
        }

        let rr = r.dot(&r);
        if rr == 0.0 {
            return SegmentIntersection::None;
        }
        let t0 = qp.dot(&r) / rr;
        let t1 = t0 + s.dot(&r) / rr;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);

        return if lo > hi {
            SegmentIntersection::None
        } else if lo == hi {
            SegmentIntersection::Point(p1 + r * lo)
        } else {
            SegmentIntersection::Overlap
        };
    }

    let mut t_num = qp.cross(&s);
    let mut u_num = qp.cross(&r);
    let mut d = denom;
    if d < 0.0 {
        t_num = -t_num;
        u_num = -u_num;
        d = -d;
    }

    if t_num < 0.0 || t_num > d || u_num < 0.0 || u_num > d {
        return SegmentIntersection::None;
    }

    SegmentIntersection::Point(p1 + r * (t_num / d))
}
