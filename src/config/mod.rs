//! Unified configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod error;
mod marga;
mod planner;
mod raster;
mod room;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use planner::{PlannerSection, SmoothingSettings};
pub use raster::RasterSection;
pub use room::{PlacementSection, RoomSection};
