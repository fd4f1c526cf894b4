//! Camera, projection, and picking options with TOML file support.
//!
//! Every tweakable constant of the orbit camera lives here. Options
//! serialize to/from TOML so a game can ship its own camera feel without
//! recompiling.

mod camera;
mod projection;
mod ray;

use std::path::Path;

pub use camera::CameraOptions;
pub use projection::ProjectionOptions;
pub use ray::RayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[projection]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit camera starting state and step sizes.
    pub camera: CameraOptions,
    /// Perspective projection parameters.
    pub projection: ProjectionOptions,
    /// Mouse-ray unprojection settings.
    pub ray: RayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`OrbitError::Io`] if the file cannot be read,
    /// [`OrbitError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        log::info!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// [`OrbitError::OptionsParse`] if the options cannot be serialized,
    /// [`OrbitError::Io`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)?;
        log::info!("saved camera options to {}", path.display());
        Ok(())
    }
}
