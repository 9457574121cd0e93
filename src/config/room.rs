//! Room domain section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Domain construction settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomSection {
    /// Robot diameter in pixels; free space closer than half of it to a wall is removed
    #[serde(default = "defaults::clearance")]
    pub clearance: u32,

    /// Insert door midpoints as waypoints
    #[serde(default = "defaults::enabled")]
    pub door_waypoints: bool,
}

impl Default for RoomSection {
    fn default() -> Self {
        Self {
            clearance: 5,
            door_waypoints: true,
        }
    }
}

/// Random placement settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementSection {
    /// Random draws per requested waypoint before giving up
    #[serde(default = "defaults::max_attempts_per_waypoint")]
    pub max_attempts_per_waypoint: usize,
}

impl Default for PlacementSection {
    fn default() -> Self {
        Self {
            max_attempts_per_waypoint: 100,
        }
    }
}
