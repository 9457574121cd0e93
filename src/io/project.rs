//! Room project persistence.
//!
//! A project stores exactly the image reference, start, end and the
//! waypoint set. Everything else is derived again on load.
//!
//! ```yaml
//! image: office.png
//! start: { x: 12, y: 40 }
//! end: { x: 310, y: 95 }
//! waypoints:
//!   - { x: 150, y: 60 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::Coord2D;
use crate::error::Result;

/// Saved planning session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomProject {
    /// Floor-plan image, relative to the project file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,

    #[serde(default)]
    pub start: Option<Coord2D>,

    #[serde(default)]
    pub end: Option<Coord2D>,

    #[serde(default)]
    pub waypoints: Vec<Coord2D>,
}

impl RoomProject {
    /// Load a project from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Save the project as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Image path resolved against the directory of `project_path`
    pub fn resolve_image(&self, project_path: &Path) -> Option<PathBuf> {
        let image = self.image.as_ref()?;
        if image.is_absolute() {
            return Some(image.clone());
        }
        let base = project_path.parent().unwrap_or(Path::new("."));
        Some(base.join(image))
    }
}
