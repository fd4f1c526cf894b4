use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Starting orbit and per-frame step sizes for the orbit camera.
pub struct CameraOptions {
    /// Starting distance from the orbit target.
    #[schemars(title = "Distance", range(min = 1.0, max = 500.0))]
    pub distance: f32,
    /// Starting orbit angle in degrees.
    #[schemars(title = "Angle")]
    pub angle: f32,
    /// Starting pitch in degrees. Only clamped once the camera first tilts.
    #[schemars(title = "Pitch", range(min = 0.0, max = 90.0))]
    pub pitch: f32,
    /// Orbit distance change per unit of zoom input.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Pitch change in degrees per frame while a vertical key is held.
    #[schemars(title = "Pitch Step", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub pitch_step: f32,
    /// Angle change in degrees per frame while a horizontal key is held.
    #[schemars(title = "Orbit Step", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub angle_step: f32,
    /// Lowest allowed pitch in degrees.
    #[schemars(skip)]
    pub min_pitch: f32,
    /// Highest allowed pitch in degrees.
    #[schemars(skip)]
    pub max_pitch: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            distance: 50.0,
            angle: 0.0,
            pitch: 20.0,
            zoom_speed: 0.1,
            pitch_step: 0.8,
            angle_step: 1.6,
            min_pitch: 22.5,
            max_pitch: 67.5,
        }
    }
}
