//! Pixel classification by exact color match.

use serde::{Deserialize, Serialize};

use crate::core::Coord2D;
use crate::error::{Result, RoomError};

/// Class of a single floor-plan pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PixelClass {
    /// Outside the room (pure white by default)
    Outside,
    /// Wall or object (pure black by default)
    Wall,
    /// Doorway (reserved gray)
    Door,
    /// Free floor, any color that is not reserved
    #[default]
    Inside,
}

impl PixelClass {
    /// Whether the agent may occupy this pixel
    #[inline]
    pub fn is_navigable(self) -> bool {
        matches!(self, PixelClass::Inside | PixelClass::Door)
    }
}

/// Reserved colors used to classify pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterPalette {
    /// Wall color (RGB)
    pub wall: [u8; 3],
    /// Outside color (RGB)
    pub outside: [u8; 3],
    /// Door color (RGB)
    pub door: [u8; 3],
}

impl Default for RasterPalette {
    fn default() -> Self {
        Self {
            wall: [0, 0, 0],
            outside: [255, 255, 255],
            door: [128, 128, 128],
        }
    }
}

impl RasterPalette {
    /// Classify one RGB triple. Anything unreserved is floor.
    #[inline]
    pub fn classify(&self, rgb: [u8; 3]) -> PixelClass {
        if rgb == self.wall {
            PixelClass::Wall
        } else if rgb == self.outside {
            PixelClass::Outside
        } else if rgb == self.door {
            PixelClass::Door
        } else {
            PixelClass::Inside
        }
    }
}

/// Decoded floor-plan pixels: row-major RGB or RGBA bytes
#[derive(Clone, Debug)]
pub struct RasterImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
}

impl RasterImage {
    /// Wrap a decoded pixel buffer.
    ///
    /// `stride` is the number of channels per pixel and must be 3 (RGB) or
    /// 4 (RGBA). The buffer must hold at least `width * height * stride` bytes.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32, stride: usize) -> Result<Self> {
        if stride != 3 && stride != 4 {
            return Err(RoomError::InvalidRaster(format!(
                "unsupported channel stride {}",
                stride
            )));
        }
        let needed = width as usize * height as usize * stride;
        if pixels.len() < needed {
            return Err(RoomError::InvalidRaster(format!(
                "buffer holds {} bytes, {}x{}x{} needs {}",
                pixels.len(),
                width,
                height,
                stride,
                needed
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    /// Build an RGB image where every pixel has `fill`
    pub fn filled(width: u32, height: u32, fill: [u8; 3]) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&fill);
        }
        Self {
            pixels,
            width,
            height,
            stride: 3,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// RGB triple at (x, y); alpha is ignored
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * self.stride;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Overwrite the RGB triple at (x, y). Out-of-bounds writes are ignored.
    pub fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * self.stride;
        self.pixels[i..i + 3].copy_from_slice(&rgb);
    }
}

/// Per-pixel classification of a raster image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassGrid {
    width: u32,
    height: u32,
    classes: Vec<PixelClass>,
}

impl ClassGrid {
    /// Grid where every pixel has the same class
    pub fn uniform(width: u32, height: u32, class: PixelClass) -> Self {
        Self {
            width,
            height,
            classes: vec![class; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Class at (x, y); `None` outside the image
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<PixelClass> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.classes[y as usize * self.width as usize + x as usize])
    }

    /// Class at a coordinate
    #[inline]
    pub fn class_at(&self, coord: Coord2D) -> Option<PixelClass> {
        self.get(coord.x, coord.y)
    }

    pub fn set(&mut self, x: i32, y: i32, class: PixelClass) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.classes[idx] = class;
    }

    /// Navigable check; pixels outside the image are never navigable
    #[inline]
    pub fn is_navigable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(PixelClass::is_navigable)
    }

    /// All coordinates whose class satisfies `pred`, in (x, y) order
    pub fn coords_where(&self, pred: impl Fn(PixelClass) -> bool) -> Vec<Coord2D> {
        let mut out = Vec::new();
        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                if self.get(x, y).is_some_and(&pred) {
                    out.push(Coord2D::new(x, y));
                }
            }
        }
        out
    }

    /// Number of pixels with the given class
    pub fn count(&self, class: PixelClass) -> usize {
        self.classes.iter().filter(|c| **c == class).count()
    }
}

/// Classify every pixel of `image` against `palette`.
pub fn classify(image: &RasterImage, palette: &RasterPalette) -> ClassGrid {
    let mut classes = Vec::with_capacity(image.width as usize * image.height as usize);
    for y in 0..image.height {
        for x in 0..image.width {
            classes.push(palette.classify(image.rgb(x, y)));
        }
    }
    ClassGrid {
        width: image.width,
        height: image.height,
        classes,
    }
}
