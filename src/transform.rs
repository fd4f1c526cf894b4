//! Model transforms: translation, per-axis rotation, and uniform scale.

use glam::{Mat4, Vec3};

use crate::util::scalar::{cos, sin, to_radians};

/// Build a model matrix from a position, per-axis rotations in degrees, and a
/// uniform scale.
///
/// Equivalent to `T * Rx * Ry * Rz * S`: a vertex is scaled, rotated about Z,
/// then Y, then X, and finally translated. The rotation product is expanded in
/// closed form instead of multiplying three matrices.
#[must_use]
pub fn transformation_matrix(
    position: Vec3,
    rotation: Vec3,
    scale: f32,
) -> Mat4 {
    let x_angle = to_radians(rotation.x);
    let x_c = cos(x_angle);
    let x_s = sin(x_angle);

    let y_angle = to_radians(rotation.y);
    let y_c = cos(y_angle);
    let y_s = sin(y_angle);

    let z_angle = to_radians(rotation.z);
    let z_c = cos(z_angle);
    let z_s = sin(z_angle);

    let sx_sy = -x_s * -y_s;
    let cx_sy = x_c * -y_s;

    let mut m = [0.0_f32; 16];
    m[0] = y_c * z_c * scale;
    m[1] = (sx_sy * z_c + x_c * z_s) * scale;
    m[2] = (cx_sy * z_c + x_s * z_s) * scale;
    m[4] = y_c * -z_s * scale;
    m[5] = (sx_sy * -z_s + x_c * z_c) * scale;
    m[6] = (cx_sy * -z_s + x_s * z_c) * scale;
    m[8] = y_s * scale;
    m[9] = -x_s * y_c * scale;
    m[10] = x_c * y_c * scale;
    m[12] = position.x;
    m[13] = position.y;
    m[14] = position.z;
    m[15] = 1.0;

    Mat4::from_cols_array(&m)
}

/// Placement of a model in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space translation.
    pub position: Vec3,
    /// Rotation about each axis in degrees.
    pub rotation: Vec3,
    /// Uniform scale, usually 1.
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    /// Create a transform from components.
    #[must_use]
    pub const fn new(position: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Column-major model matrix.
    #[must_use]
    pub fn to_mat4(self) -> Mat4 {
        transformation_matrix(self.position, self.rotation, self.scale)
    }
}
