//! Perspective projection with a precomputed field-of-view scale.

use glam::{Mat4, Vec2};

use super::viewport::Viewport;
use crate::options::ProjectionOptions;
use crate::util::scalar::{tan, to_radians};

/// Perspective projection parameters.
///
/// The horizontal scale `1 / tan(fov / 2)` is computed once in
/// [`Projection::new`] and carried with the value, so the per-frame matrix
/// and ray code never touch a tangent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fovy: f32,
    znear: f32,
    zfar: f32,
    x_scale: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(70.0, 0.1, 1000.0)
    }
}

impl Projection {
    /// Create a projection from a vertical field of view in degrees and the
    /// near/far clip distances.
    ///
    /// Values are stored as given. A field of view outside `(0, 180)` or clip
    /// planes that are not `0 < znear < zfar` produce non-finite or inverted
    /// matrices; they are logged at warn level and reported by
    /// [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn new(fovy: f32, znear: f32, zfar: f32) -> Self {
        let x_scale = (1.0 / tan(f64::from(to_radians(fovy / 2.0)))) as f32;
        log::debug!(
            "projection fovy={fovy} near={znear} far={zfar} x_scale={x_scale}"
        );
        let projection = Self {
            fovy,
            znear,
            zfar,
            x_scale,
        };
        if !projection.is_valid() {
            log::warn!(
                "degenerate projection fovy={fovy} near={znear} far={zfar}"
            );
        }
        projection
    }

    /// Whether the field of view lies in `(0, 180)` degrees and
    /// `0 < znear < zfar`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fovy > 0.0
            && self.fovy < 180.0
            && self.znear > 0.0
            && self.zfar > self.znear
    }

    /// Create a projection from configuration.
    #[must_use]
    pub fn from_options(options: &ProjectionOptions) -> Self {
        Self::new(options.fovy, options.znear, options.zfar)
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Near clip distance.
    #[must_use]
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clip distance.
    #[must_use]
    pub fn zfar(&self) -> f32 {
        self.zfar
    }

    /// The precomputed `1 / tan(fov / 2)`.
    #[must_use]
    pub fn x_scale(&self) -> f32 {
        self.x_scale
    }

    /// Vertical scale for the given viewport (`x_scale * aspect`).
    #[must_use]
    pub fn y_scale(&self, viewport: Viewport) -> f32 {
        self.x_scale * viewport.aspect_ratio()
    }

    fn frustum_length(&self) -> f32 {
        self.zfar - self.znear
    }

    /// OpenGL-convention perspective matrix (`-1` in the w row, depth mapped
    /// to `[-1, 1]`).
    #[must_use]
    pub fn matrix(&self, viewport: Viewport) -> Mat4 {
        let frustum_length = self.frustum_length();

        let mut m = [0.0_f32; 16];
        m[0] = self.x_scale;
        m[5] = self.y_scale(viewport);
        m[10] = -((self.zfar + self.znear) / frustum_length);
        m[11] = -1.0;
        m[14] = -((2.0 * self.znear * self.zfar) / frustum_length);
        m[15] = 0.0;

        Mat4::from_cols_array(&m)
    }

    /// Undo the projection's x/y scaling for a point in normalized device
    /// coordinates, giving its eye-space direction at `z = -1`.
    #[must_use]
    pub fn clip_to_eye(&self, ndc: Vec2, viewport: Viewport) -> Vec2 {
        let y_scale = self.y_scale(viewport);
        let depth_term = (2.0 * self.znear * self.zfar) / self.frustum_length();

        // Never zero for positive clip planes.
        let determinant_inv = 1.0 / (self.x_scale * y_scale * depth_term);

        Vec2::new(
            y_scale * depth_term * determinant_inv * ndc.x,
            self.x_scale * depth_term * determinant_inv * ndc.y,
        )
    }
}
