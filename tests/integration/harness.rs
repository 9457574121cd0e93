//! Synthetic floor plans for integration tests

use marga::{RasterImage, Room, RoomConfig};

pub const FLOOR: [u8; 3] = [200, 200, 200];
pub const WALL: [u8; 3] = [0, 0, 0];
pub const DOOR: [u8; 3] = [128, 128, 128];

/// Enable planner logs when RUST_LOG is set
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builder for small test images
pub struct FloorPlan {
    image: RasterImage,
}

impl FloorPlan {
    /// Free floor everywhere
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            image: RasterImage::filled(width, height, FLOOR),
        }
    }

    /// Solid wall block covering `x0..x1` by `y0..y1`
    pub fn block(mut self, x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.set_rgb(x, y, WALL);
            }
        }
        self
    }

    /// Wall column at `x` spanning the full height
    pub fn wall_column(self, x: u32) -> Self {
        let height = self.image.height();
        self.block(x, 0, x + 1, height)
    }

    pub fn door(mut self, x: u32, y: u32) -> Self {
        self.image.set_rgb(x, y, DOOR);
        self
    }

    /// Build a room without clearance erosion
    pub fn room(&self) -> Room {
        self.room_with(RoomConfig::with_clearance(1))
    }

    pub fn room_with(&self, config: RoomConfig) -> Room {
        Room::new(&self.image, config).expect("room construction")
    }
}

/// 11x11 room split by a wall at x=5 with a two-pixel door at (5,5)-(5,6)
pub fn door_room() -> FloorPlan {
    FloorPlan::open(11, 11).wall_column(5).door(5, 5).door(5, 6)
}

/// 30x30 room with a square pillar in the middle
pub fn pillar_room() -> FloorPlan {
    FloorPlan::open(30, 30).block(11, 11, 19, 19)
}
