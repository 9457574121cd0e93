//! Floor-plan image loading.

use std::path::Path;

use log::info;

use crate::error::Result;
use crate::raster::RasterImage;

/// Decode an image file into an RGBA raster.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    let path = path.as_ref();
    let rgba = image::open(path)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    info!(
        "[Image] Loaded {} ({}x{})",
        path.display(),
        width,
        height
    );
    RasterImage::new(rgba.into_raw(), width, height, 4)
}
