//! Doorway spans.
//!
//! Each connected group of door pixels is reduced to a 2-point span in
//! pixel coordinates that runs along the group's longer axis through its
//! middle. Door midpoints later become mandatory waypoints.

use crate::core::{Coord2D, Edge, Polygon};
use crate::raster::{ClassGrid, PixelClass};

use super::tracer::trace_loops;

/// Reduce one traced door loop to its span.
///
/// The loop lives on the corner lattice, so its bounding box `[min, max)`
/// covers pixels `min..=max - 1`.
pub fn door_span(door_loop: &Polygon) -> Option<Edge> {
    let vertices = door_loop.vertices();
    let min_x = vertices.iter().map(|c| c.x).min()?;
    let max_x = vertices.iter().map(|c| c.x).max()? - 1;
    let min_y = vertices.iter().map(|c| c.y).min()?;
    let max_y = vertices.iter().map(|c| c.y).max()? - 1;

    let width = max_x - min_x;
    let height = max_y - min_y;

    if width > height {
        let y = min_y + height / 2;
        Some(Edge::new(Coord2D::new(min_x, y), Coord2D::new(max_x, y)))
    } else {
        let x = min_x + width / 2;
        Some(Edge::new(Coord2D::new(x, min_y), Coord2D::new(x, max_y)))
    }
}

/// Trace door pixels into spans, one per door loop.
pub fn trace_doors(grid: &ClassGrid) -> Vec<Edge> {
    trace_loops(grid, |class| class == PixelClass::Door)
        .iter()
        .filter_map(door_span)
        .collect()
}
