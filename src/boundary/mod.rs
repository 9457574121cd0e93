//! Boundary extraction from classified pixels.
//!
//! Produces the border polygons (outer boundary and holes, not
//! distinguished) of the navigable region, plus doorway spans.

mod door;
mod tracer;

pub use door::{door_span, trace_doors};
pub use tracer::{corner_point, trace_loops};

use log::debug;

use crate::core::{Edge, Polygon};
use crate::raster::{ClassGrid, PixelClass};

/// Border loops and door spans of one room
#[derive(Clone, Debug, Default)]
pub struct Boundary {
    /// Closed loops on the corner lattice
    pub borders: Vec<Polygon>,
    /// Door spans in pixel coordinates
    pub doors: Vec<Edge>,
}

impl Boundary {
    /// True when the image contained no navigable region
    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }
}

/// Trace the navigable region of `navigable` and the doors of `doors`.
///
/// Door spans come from the un-eroded grid so that a doorway narrowed away
/// by clearance is still reported.
pub fn trace_boundary(navigable: &ClassGrid, doors: &ClassGrid) -> Boundary {
    let borders = trace_loops(navigable, PixelClass::is_navigable);
    let doors = trace_doors(doors);
    debug!(
        "[Boundary] Traced {} border polygons ({} vertices), {} doors",
        borders.len(),
        borders.iter().map(Polygon::len).sum::<usize>(),
        doors.len()
    );
    Boundary { borders, doors }
}
