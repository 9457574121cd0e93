//! Default value functions for serde deserialization.

use crate::pathfinding::SearchAlgorithm;

pub fn enabled() -> bool {
    true
}

pub fn clearance() -> u32 {
    5
}

pub fn wall_color() -> [u8; 3] {
    [0, 0, 0]
}

pub fn outside_color() -> [u8; 3] {
    [255, 255, 255]
}

pub fn door_color() -> [u8; 3] {
    [128, 128, 128]
}

pub fn algorithm() -> SearchAlgorithm {
    SearchAlgorithm::Dijkstra
}

pub fn smoothing_steps() -> usize {
    150
}

pub fn max_attempts_per_waypoint() -> usize {
    100
}
