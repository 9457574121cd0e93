//! Error types for Marga

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Marga error type.
///
/// Only genuine failures live here. Rejected placements and unreachable
/// targets are ordinary return values on [`crate::Room`].
#[derive(Error, Debug)]
pub enum RoomError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid raster: {0}")]
    InvalidRaster(String),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Project format error: {0}")]
    Project(#[from] serde_yaml::Error),

    #[error("Project has no image reference")]
    MissingImage,

    #[error("Triangulation error: {0}")]
    Triangulation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl From<spade::InsertionError> for RoomError {
    fn from(e: spade::InsertionError) -> Self {
        RoomError::Triangulation(format!("{:?}", e))
    }
}

pub type Result<T> = std::result::Result<T, RoomError>;
