//! Catmull-Rom smoothing and collision re-check.
//!
//! The straight-segment path is only guaranteed visible segment by
//! segment. The interpolated curve may cut wall corners, so every sample
//! is checked against the domain afterwards.

use log::debug;

use crate::core::{Coord2D, PathPoint};
use crate::domain::RoomDomain;

use super::types::Trajectory;

/// Path smoothing configuration
#[derive(Clone, Debug)]
pub struct SmoothingConfig {
    /// Samples per path segment
    pub steps: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { steps: 150 }
    }
}

/// Uniform Catmull-Rom point between `p1` and `p2` at `t` in [0, 1]
#[inline]
fn catmull_rom_point(p0: PathPoint, p1: PathPoint, p2: PathPoint, p3: PathPoint, t: f64) -> PathPoint {
    let t2 = t * t;
    let t3 = t2 * t;
    let blend = |a: f64, b: f64, c: f64, d: f64| {
        0.5 * (2.0 * b
            + (-a + c) * t
            + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
            + (-a + 3.0 * b - 3.0 * c + d) * t3)
    };
    PathPoint::new(
        blend(p0.x, p1.x, p2.x, p3.x),
        blend(p0.y, p1.y, p2.y, p3.y),
    )
}

/// Interpolate `path` with `steps` samples per segment.
///
/// End segments reuse the first/last point as the missing control point.
/// The result starts exactly at the first point and ends exactly at the last.
pub fn catmull_rom(path: &[PathPoint], steps: usize) -> Vec<PathPoint> {
    let n = path.len();
    if n < 2 {
        return path.to_vec();
    }
    let steps = steps.max(1);

    let mut samples = Vec::with_capacity((n - 1) * steps + 1);
    for i in 0..n - 1 {
        let p0 = path[i.saturating_sub(1)];
        let p1 = path[i];
        let p2 = path[i + 1];
        let p3 = path[(i + 2).min(n - 1)];

        for k in 0..steps {
            let t = k as f64 / steps as f64;
            samples.push(catmull_rom_point(p0, p1, p2, p3, t));
        }
    }
    samples.push(path[n - 1]);
    samples
}

/// Samples that fall outside the domain
pub fn find_collisions(samples: &[PathPoint], domain: &RoomDomain) -> Vec<PathPoint> {
    samples
        .iter()
        .copied()
        .filter(|p| !domain.contains(*p))
        .collect()
}

/// Path smoother
pub struct PathSmoother<'a> {
    domain: &'a RoomDomain,
    config: SmoothingConfig,
}

impl<'a> PathSmoother<'a> {
    /// Create a new path smoother
    pub fn new(domain: &'a RoomDomain, config: SmoothingConfig) -> Self {
        Self { domain, config }
    }

    /// Interpolate a waypoint path.
    ///
    /// The path is reversed first when it runs right to left, so curves are
    /// always produced from the leftmost endpoint.
    pub fn interpolate(&self, path: &[Coord2D]) -> Vec<PathPoint> {
        let mut points: Vec<PathPoint> = path.iter().map(|c| c.to_point()).collect();
        let right_to_left = match (points.first(), points.last()) {
            (Some(first), Some(last)) => first.x > last.x,
            _ => false,
        };
        if right_to_left {
            points.reverse();
        }
        catmull_rom(&points, self.config.steps)
    }

    /// Samples of `samples` outside the domain
    pub fn check(&self, samples: &[PathPoint]) -> Vec<PathPoint> {
        find_collisions(samples, self.domain)
    }

    /// Interpolate and flag samples that clip walls
    pub fn smooth(&self, path: &[Coord2D]) -> Trajectory {
        let samples = self.interpolate(path);
        let collisions = self.check(&samples);
        if !collisions.is_empty() {
            debug!(
                "[Smoothing] {} of {} samples leave the domain",
                collisions.len(),
                samples.len()
            );
        }

        Trajectory {
            points: samples,
            collisions,
        }
    }
}
