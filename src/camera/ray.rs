//! Mouse-ray unprojection for click detection and picking.
//!
//! Screen position → normalized device coordinates → eye space (undoing the
//! projection scale) → world space (undoing the view rotation via
//! [`Orientation::to_world`](super::Orientation::to_world)) → unit length.

use glam::{Vec2, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::core::Camera;
use super::projection::Projection;
use super::viewport::Viewport;
use crate::util::scalar;

/// Directions closer to horizontal than this never hit a horizontal plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// How unprojected directions are scaled to unit length.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Divide by the bit-trick [`scalar::sqrt`]. Matches the renderer's
    /// existing picking output, within about 0.2% of unit length.
    #[default]
    Fast,
    /// Divide by `f32::sqrt`.
    Precise,
}

impl Normalization {
    /// Scale `v` to (approximately) unit length. `v` must be non-zero.
    #[must_use]
    pub fn normalize(self, v: Vec3) -> Vec3 {
        let length_sq = v.x * v.x + v.y * v.y + v.z * v.z;
        let length = match self {
            Self::Fast => scalar::sqrt(length_sq),
            Self::Precise => length_sq.sqrt(),
        };
        v / length
    }
}

/// World-space direction through the screen position `screen`.
///
/// `screen` is in pixels with the origin at the bottom-left of `viewport`.
/// The result is unit length up to the error of `normalization`; the
/// viewport center yields the camera's forward axis.
#[must_use]
pub fn calculate_mouse_ray(
    camera: &Camera,
    projection: &Projection,
    viewport: Viewport,
    screen: Vec2,
    normalization: Normalization,
) -> Vec3 {
    let ndc = viewport.to_ndc(screen);
    let eye = projection.clip_to_eye(ndc, viewport);
    // The eye vector has z = -1 and the rotation preserves length, so the
    // world vector is never shorter than one.
    let world = camera.orientation().to_world(eye.extend(-1.0));
    normalization.normalize(world)
}

/// Half-line from the camera through a screen position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction in world space.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from the camera's position through `screen`.
    #[must_use]
    pub fn from_screen(
        camera: &Camera,
        projection: &Projection,
        viewport: Viewport,
        screen: Vec2,
        normalization: Normalization,
    ) -> Self {
        Self::new(
            camera.position(),
            calculate_mouse_ray(
                camera,
                projection,
                viewport,
                screen,
                normalization,
            ),
        )
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Where the ray crosses the horizontal plane `y = height`.
    ///
    /// `None` if the ray runs parallel to the plane or points away from it.
    #[must_use]
    pub fn intersect_plane_y(&self, height: f32) -> Option<Vec3> {
        if self.direction.y.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t >= 0.0).then(|| self.point_at(t))
    }
}
