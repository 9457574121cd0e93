//! Boundary tracing along pixel edges.
//!
//! A member pixel side that faces a non-member pixel (or the image border)
//! is a *crack*: a unit edge on the corner lattice, oriented so that the
//! member pixel lies on its right (clockwise around members in image
//! space). Corner `(cx, cy)` is the top-left corner of pixel `(cx, cy)`.
//!
//! Walking cracks end to end yields closed loops. The walk keeps its
//! direction while it can and otherwise turns right before left, so
//! diagonally touching pixel groups become separate loops.

use std::collections::BTreeSet;

use log::trace;

use crate::core::{Coord2D, PathPoint, Polygon};
use crate::raster::{ClassGrid, PixelClass};

/// Cardinal walk direction in image space (y grows downwards)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    #[inline]
    fn step(self) -> Coord2D {
        match self {
            Direction::East => Coord2D::new(1, 0),
            Direction::South => Coord2D::new(0, 1),
            Direction::West => Coord2D::new(-1, 0),
            Direction::North => Coord2D::new(0, -1),
        }
    }

    /// Directions to try after `self`, in priority order
    #[inline]
    fn continuations(self) -> [Direction; 3] {
        match self {
            Direction::West => [Direction::West, Direction::North, Direction::South],
            Direction::South => [Direction::South, Direction::West, Direction::East],
            Direction::East => [Direction::East, Direction::South, Direction::North],
            Direction::North => [Direction::North, Direction::East, Direction::West],
        }
    }
}

/// Unit boundary edge starting at a lattice corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Crack {
    start: Coord2D,
    dir: Direction,
}

impl Crack {
    #[inline]
    fn end(&self) -> Coord2D {
        self.start + self.dir.step()
    }
}

/// Pixel-space position of a lattice corner
#[inline]
pub fn corner_point(corner: Coord2D) -> PathPoint {
    PathPoint::new(f64::from(corner.x) - 0.5, f64::from(corner.y) - 0.5)
}

/// Collect every crack of the pixel set selected by `member`.
pub(crate) fn collect_cracks(
    grid: &ClassGrid,
    member: impl Fn(PixelClass) -> bool,
) -> BTreeSet<Crack> {
    let is_member = |x: i32, y: i32| grid.get(x, y).is_some_and(&member);
    let mut cracks = BTreeSet::new();

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if !is_member(x, y) {
                continue;
            }
            if !is_member(x, y - 1) {
                cracks.insert(Crack {
                    start: Coord2D::new(x, y),
                    dir: Direction::East,
                });
            }
            if !is_member(x + 1, y) {
                cracks.insert(Crack {
                    start: Coord2D::new(x + 1, y),
                    dir: Direction::South,
                });
            }
            if !is_member(x, y + 1) {
                cracks.insert(Crack {
                    start: Coord2D::new(x + 1, y + 1),
                    dir: Direction::West,
                });
            }
            if !is_member(x - 1, y) {
                cracks.insert(Crack {
                    start: Coord2D::new(x, y + 1),
                    dir: Direction::North,
                });
            }
        }
    }
    cracks
}

/// Consume the working set into closed loops.
///
/// Each loop starts at the smallest remaining crack. A vertex is recorded
/// only where the walk switches direction. An empty working set yields no
/// loops.
pub(crate) fn walk_loops(mut cracks: BTreeSet<Crack>) -> Vec<Polygon> {
    let mut loops = Vec::new();

    while let Some(first) = cracks.pop_first() {
        let mut vertices = vec![first.start];
        let mut dir = first.dir;
        let mut pos = first.end();

        loop {
            let next = dir.continuations().into_iter().find_map(|candidate| {
                let crack = Crack {
                    start: pos,
                    dir: candidate,
                };
                cracks.take(&crack)
            });

            match next {
                Some(crack) => {
                    if crack.dir != dir {
                        vertices.push(pos);
                        dir = crack.dir;
                    }
                    pos = crack.end();
                }
                None => break,
            }
        }

        trace!(
            "[Tracer] Closed loop at {} with {} vertices",
            first.start,
            vertices.len()
        );
        loops.push(Polygon::new(vertices));
    }

    loops
}

/// Trace the closed boundary loops of every pixel matching `member`.
pub fn trace_loops(grid: &ClassGrid, member: impl Fn(PixelClass) -> bool) -> Vec<Polygon> {
    walk_loops(collect_cracks(grid, member))
}
