use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Normalization;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Picking", inline)]
#[serde(default)]
/// Mouse-ray unprojection settings.
pub struct RayOptions {
    /// How picking rays are scaled to unit length.
    #[schemars(title = "Normalization")]
    pub normalization: Normalization,
}
