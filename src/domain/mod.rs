//! Navigable domain as a constrained Delaunay triangulation.
//!
//! Border loops become hard constraint edges. Faces are tagged in or out of
//! the domain by a breadth-first parity flood from the unbounded face:
//! crossing an unconstrained edge keeps parity, crossing a constrained
//! edge into an unvisited face increments it. Odd parity is inside, so the
//! outer boundary and every hole each flip membership exactly once.

use std::collections::VecDeque;

use log::{debug, warn};
use spade::{ConstrainedDelaunayTriangulation, Point2, PositionInTriangulation, Triangulation};

use crate::boundary::corner_point;
use crate::core::{Coord2D, PathPoint, Polygon, Triangle};
use crate::error::Result;

/// Index of the unbounded face in spade's face arena
const OUTER_FACE: usize = 0;

type Cdt = ConstrainedDelaunayTriangulation<Point2<f64>>;

/// Triangulated navigable region of a room
pub struct RoomDomain {
    cdt: Cdt,
    /// Domain tag per face, indexed by fixed face index
    in_domain: Vec<bool>,
    skipped_constraints: usize,
}

impl RoomDomain {
    /// Triangulate the given border loops (corner lattice) and tag faces.
    pub fn build(borders: &[Polygon]) -> Result<Self> {
        let mut cdt = Cdt::new();
        let mut skipped_constraints = 0;

        for polygon in borders {
            let mut handles = Vec::with_capacity(polygon.len());
            for &corner in polygon.vertices() {
                let p = corner_point(corner);
                handles.push(cdt.insert(Point2::new(p.x, p.y))?);
            }

            let n = handles.len();
            for i in 0..n {
                let (from, to) = (handles[i], handles[(i + 1) % n]);
                if from == to {
                    continue;
                }
                if cdt.can_add_constraint(from, to) {
                    cdt.add_constraint(from, to);
                } else {
                    skipped_constraints += 1;
                    warn!(
                        "[Domain] Skipping constraint {} -> {}: crosses an existing border",
                        polygon.vertices()[i],
                        polygon.vertices()[(i + 1) % n]
                    );
                }
            }
        }

        let in_domain = parity_flood(&cdt);
        let inside = in_domain.iter().filter(|tag| **tag).count();
        debug!(
            "[Domain] {} vertices, {} constraints, {}/{} faces in domain",
            cdt.num_vertices(),
            cdt.num_constraints(),
            inside,
            cdt.num_inner_faces()
        );

        Ok(Self {
            cdt,
            in_domain,
            skipped_constraints,
        })
    }

    #[inline]
    fn face_in_domain(&self, index: usize) -> bool {
        self.in_domain.get(index).copied().unwrap_or(false)
    }

    /// Point-in-domain query in pixel space.
    ///
    /// Inclusive: a point on an edge or vertex is inside when any incident
    /// face is tagged in-domain.
    pub fn contains(&self, point: PathPoint) -> bool {
        match self.cdt.locate(Point2::new(point.x, point.y)) {
            PositionInTriangulation::OnFace(face) => self.face_in_domain(face.index()),
            PositionInTriangulation::OnEdge(edge) => {
                let edge = self.cdt.directed_edge(edge);
                self.face_in_domain(edge.face().fix().index())
                    || self.face_in_domain(edge.rev().face().fix().index())
            }
            PositionInTriangulation::OnVertex(vertex) => self
                .cdt
                .vertex(vertex)
                .out_edges()
                .any(|edge| self.face_in_domain(edge.face().fix().index())),
            _ => false,
        }
    }

    /// Point-in-domain query for a pixel center
    #[inline]
    pub fn contains_coord(&self, coord: Coord2D) -> bool {
        self.contains(coord.to_point())
    }

    /// In-domain triangles, for rendering
    pub fn triangles(&self) -> Vec<Triangle> {
        self.cdt
            .inner_faces()
            .filter(|face| self.face_in_domain(face.fix().index()))
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

    /// True when no face is in the domain
    pub fn is_empty(&self) -> bool {
        !self.in_domain.iter().any(|tag| *tag)
    }

    /// Number of constraint edges in the triangulation
    pub fn num_constraints(&self) -> usize {
        self.cdt.num_constraints()
    }

    /// Border edges that could not be inserted
    pub fn skipped_constraints(&self) -> usize {
        self.skipped_constraints
    }
}

impl std::fmt::Debug for RoomDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomDomain")
            .field("vertices", &self.cdt.num_vertices())
            .field("constraints", &self.cdt.num_constraints())
            .field("faces", &self.cdt.num_inner_faces())
            .finish()
    }
}

/// Tag every face by crossing parity from the unbounded face.
fn parity_flood(cdt: &Cdt) -> Vec<bool> {
    let num_faces = cdt.num_all_faces();
    let mut adjacency: Vec<Vec<(usize, bool)>> = vec![Vec::new(); num_faces];

    for face in cdt.inner_faces() {
        let index = face.fix().index();
        for edge in face.adjacent_edges() {
            let neighbour = edge.rev().face().fix().index();
            let constrained = cdt.is_constraint_edge(edge.as_undirected().fix());
            adjacency[index].push((neighbour, constrained));
            // The outer face has no adjacent_edges of its own
            if neighbour == OUTER_FACE {
                adjacency[OUTER_FACE].push((index, constrained));
            }
        }
    }

    let mut depth: Vec<Option<usize>> = vec![None; num_faces];
    let mut borders = VecDeque::from([(OUTER_FACE, 0usize)]);

    while let Some((seed, d)) = borders.pop_front() {
        if depth[seed].is_some() {
            continue;
        }
        depth[seed] = Some(d);
        let mut stack = vec![seed];

        while let Some(face) = stack.pop() {
            for &(neighbour, constrained) in &adjacency[face] {
                if depth[neighbour].is_some() {
                    continue;
                }
                if constrained {
                    borders.push_back((neighbour, d + 1));
                } else {
                    depth[neighbour] = Some(d);
                    stack.push(neighbour);
                }
            }
        }
    }

    depth
        .into_iter()
        .map(|d| d.is_some_and(|d| d % 2 == 1))
        .collect()
}
