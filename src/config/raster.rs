//! Raster classification section.

use serde::{Deserialize, Serialize};

use crate::raster::RasterPalette;

use super::defaults;

/// Reserved colors of the floor-plan image
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RasterSection {
    /// Walls and objects (RGB)
    #[serde(default = "defaults::wall_color")]
    pub wall: [u8; 3],

    /// Outside the room (RGB)
    #[serde(default = "defaults::outside_color")]
    pub outside: [u8; 3],

    /// Doorways (RGB)
    #[serde(default = "defaults::door_color")]
    pub door: [u8; 3],
}

impl Default for RasterSection {
    fn default() -> Self {
        Self {
            wall: [0, 0, 0],
            outside: [255, 255, 255],
            door: [128, 128, 128],
        }
    }
}

impl RasterSection {
    pub fn to_palette(&self) -> RasterPalette {
        RasterPalette {
            wall: self.wall,
            outside: self.outside,
            door: self.door,
        }
    }
}
