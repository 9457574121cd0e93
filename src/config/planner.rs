//! Planner configuration section.

use serde::{Deserialize, Serialize};

use crate::pathfinding::SearchAlgorithm;

use super::defaults;

/// Path search and smoothing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// `dijkstra` or `astar`
    #[serde(default = "defaults::algorithm")]
    pub algorithm: SearchAlgorithm,

    /// Catmull-Rom smoothing
    #[serde(default)]
    pub smoothing: SmoothingSettings,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            algorithm: SearchAlgorithm::Dijkstra,
            smoothing: SmoothingSettings::default(),
        }
    }
}

/// Path smoothing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingSettings {
    /// Enable path smoothing
    #[serde(default = "defaults::enabled")]
    pub enabled: bool,

    /// Samples per path segment
    #[serde(default = "defaults::smoothing_steps")]
    pub steps: usize,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            steps: 150,
        }
    }
}
