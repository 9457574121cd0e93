//! File I/O: floor-plan images, project files and SVG export.

mod loader;
mod project;
mod svg_export;

pub use loader::load_raster;
pub use project::RoomProject;
pub use svg_export::{export_svg, render_room};
