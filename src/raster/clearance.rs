//! Clearance erosion of navigable pixels.
//!
//! The robot is a disc of diameter `clearance` pixels. Its center may only
//! sit on a pixel whose whole disc neighbourhood is navigable, so navigable
//! pixels within `clearance / 2` of a wall, an outside pixel or the image
//! border are turned into walls before boundary tracing.

use log::debug;

use super::classify::{ClassGrid, PixelClass};

/// Offsets within a disc of `radius` pixels, excluding the center
fn disc_offsets(radius: i32) -> Vec<(i32, i32)> {
    let r2 = radius * radius;
    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if (dx != 0 || dy != 0) && dx * dx + dy * dy <= r2 {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Erode navigable pixels closer than `clearance / 2` to anything non-navigable.
///
/// A clearance of 0 or 1 leaves the grid unchanged.
pub fn erode(grid: &ClassGrid, clearance: u32) -> ClassGrid {
    let radius = (clearance / 2) as i32;
    if radius == 0 {
        return grid.clone();
    }

    let offsets = disc_offsets(radius);
    let mut eroded = grid.clone();
    let mut removed = 0usize;

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            if !grid.is_navigable(x, y) {
                continue;
            }
            let blocked = offsets
                .iter()
                .any(|&(dx, dy)| !grid.is_navigable(x + dx, y + dy));
            if blocked {
                eroded.set(x, y, PixelClass::Wall);
                removed += 1;
            }
        }
    }

    debug!(
        "[Clearance] Eroded {} pixels (clearance={}, radius={})",
        removed, clearance, radius
    );
    eroded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_clearance_is_identity() {
        let mut grid = ClassGrid::uniform(5, 5, PixelClass::Inside);
        grid.set(2, 2, PixelClass::Wall);
        assert_eq!(erode(&grid, 0), grid);
        assert_eq!(erode(&grid, 1), grid);
    }

    #[test]
    fn test_image_border_erodes() {
        let grid = ClassGrid::uniform(7, 7, PixelClass::Inside);
        let eroded = erode(&grid, 3); // radius 1
        for i in 0..7 {
            assert_eq!(eroded.get(i, 0), Some(PixelClass::Wall));
            assert_eq!(eroded.get(0, i), Some(PixelClass::Wall));
            assert_eq!(eroded.get(i, 6), Some(PixelClass::Wall));
            assert_eq!(eroded.get(6, i), Some(PixelClass::Wall));
        }
        assert_eq!(eroded.count(PixelClass::Inside), 25);
    }

    #[test]
    fn test_disc_shape() {
        let mut grid = ClassGrid::uniform(11, 11, PixelClass::Inside);
        grid.set(5, 5, PixelClass::Wall);
        let eroded = erode(&grid, 4); // radius 2
        // Straight-line neighbours at distance 2 are eroded
        assert_eq!(eroded.get(7, 5), Some(PixelClass::Wall));
        assert_eq!(eroded.get(5, 3), Some(PixelClass::Wall));
        // Diagonal at distance sqrt(8) > 2 survives
        assert_eq!(eroded.get(7, 7), Some(PixelClass::Inside));
        // Distance 3 survives
        assert_eq!(eroded.get(8, 5), Some(PixelClass::Inside));
    }

    #[test]
    fn test_doors_keep_their_class_when_wide_enough() {
        let mut grid = ClassGrid::uniform(9, 9, PixelClass::Inside);
        grid.set(4, 4, PixelClass::Door);
        let eroded = erode(&grid, 2);
        assert_eq!(eroded.get(4, 4), Some(PixelClass::Door));
    }
}
