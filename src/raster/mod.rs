//! Raster stage: pixel classification and clearance erosion.

mod classify;
mod clearance;

pub use classify::{ClassGrid, PixelClass, RasterImage, RasterPalette, classify};
pub use clearance::erode;
