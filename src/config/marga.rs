//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::SmoothingConfig;
use crate::room::RoomConfig;

use super::error::ConfigLoadError;
use super::planner::PlannerSection;
use super::raster::RasterSection;
use super::room::{PlacementSection, RoomSection};

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Reserved image colors
    #[serde(default)]
    pub raster: RasterSection,

    /// Domain settings
    #[serde(default)]
    pub room: RoomSection,

    /// Search and smoothing settings
    #[serde(default)]
    pub planner: PlannerSection,

    /// Random placement settings
    #[serde(default)]
    pub placement: PlacementSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.planner.smoothing.steps == 0 {
            return Err(ConfigLoadError::Invalid(
                "planner.smoothing.steps must be at least 1".to_string(),
            ));
        }
        let colors = [self.raster.wall, self.raster.outside, self.raster.door];
        if colors[0] == colors[1] || colors[0] == colors[2] || colors[1] == colors[2] {
            return Err(ConfigLoadError::Invalid(
                "raster colors must be distinct".to_string(),
            ));
        }
        Ok(())
    }

    /// Convert to RoomConfig
    pub fn to_room_config(&self) -> RoomConfig {
        RoomConfig {
            palette: self.raster.to_palette(),
            clearance: self.room.clearance,
            door_waypoints: self.room.door_waypoints,
            algorithm: self.planner.algorithm,
            smooth_paths: self.planner.smoothing.enabled,
            smoothing: SmoothingConfig {
                steps: self.planner.smoothing.steps,
            },
            max_attempts_per_waypoint: self.placement.max_attempts_per_waypoint,
        }
    }
}
