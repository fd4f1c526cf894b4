//! Camera orientation: the view rotation and its inverse.
//!
//! The view matrix rotates world space by yaw about Y and then by pitch about
//! X (`V = Rx(pitch) * Ry(yaw) * T(-position)`). The mouse-ray unprojector
//! needs the inverse of that rotation, which is expanded by hand here from the
//! same sines and cosines. Both directions live on [`Orientation`] so the
//! formulas cannot drift apart: editing [`Orientation::view_matrix`] means
//! re-deriving [`Orientation::to_world`] in the same file.

use glam::{Mat4, Vec3};

use crate::util::scalar::{cos, sin, to_radians};

/// Precomputed pitch/yaw sines and cosines for one camera pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    cos_pitch: f32,
    sin_pitch: f32,
    cos_yaw: f32,
    sin_yaw: f32,
}

impl Orientation {
    /// Build from pitch and yaw in degrees.
    #[must_use]
    pub fn from_degrees(pitch: f32, yaw: f32) -> Self {
        let pitch = to_radians(pitch);
        let yaw = to_radians(yaw);
        Self {
            cos_pitch: cos(pitch),
            sin_pitch: sin(pitch),
            cos_yaw: cos(yaw),
            sin_yaw: sin(yaw),
        }
    }

    /// World-to-camera matrix for a camera at `position`.
    ///
    /// The rotation block is written out directly and the translation column
    /// is the negated position pushed through that rotation, so no general
    /// matrix product is needed.
    #[must_use]
    pub fn view_matrix(self, position: Vec3) -> Mat4 {
        let Self {
            cos_pitch,
            sin_pitch,
            cos_yaw,
            sin_yaw,
        } = self;

        let mut m = [0.0_f32; 16];
        m[0] = cos_yaw;
        m[1] = -sin_pitch * -sin_yaw;
        m[2] = cos_pitch * -sin_yaw;
        m[5] = cos_pitch;
        m[6] = sin_pitch;
        m[8] = sin_yaw;
        m[9] = -sin_pitch * cos_yaw;
        m[10] = cos_pitch * cos_yaw;
        m[15] = 1.0;

        // m[4] is zero, so x does not feed the y column.
        m[12] = m[0] * -position.x + m[8] * -position.z;
        m[13] = m[1] * -position.x + m[5] * -position.y + m[9] * -position.z;
        m[14] = m[2] * -position.x + m[6] * -position.y + m[10] * -position.z;

        Mat4::from_cols_array(&m)
    }

    /// Rotate a world-space direction into camera space.
    #[must_use]
    pub fn to_view(self, world: Vec3) -> Vec3 {
        let Self {
            cos_pitch,
            sin_pitch,
            cos_yaw,
            sin_yaw,
        } = self;

        Vec3::new(
            cos_yaw * world.x + sin_yaw * world.z,
            sin_pitch * sin_yaw * world.x + cos_pitch * world.y
                - sin_pitch * cos_yaw * world.z,
            -cos_pitch * sin_yaw * world.x
                + sin_pitch * world.y
                + cos_pitch * cos_yaw * world.z,
        )
    }

    /// Rotate a camera-space direction back into world space.
    ///
    /// Hand-expanded inverse of the rotation block of
    /// [`view_matrix`](Self::view_matrix). The `pitch_norm`, `yaw_norm`, and
    /// determinant terms are all `sin² + cos²` sums that come out at one; they
    /// are kept so unprojected rays round exactly as the renderer expects.
    #[must_use]
    pub fn to_world(self, eye: Vec3) -> Vec3 {
        let Self {
            cos_pitch,
            sin_pitch,
            cos_yaw,
            sin_yaw,
        } = self;

        let cos_pitch_sq = cos_pitch * cos_pitch;
        let sin_pitch_sq = sin_pitch * sin_pitch;
        let cos_yaw_sq = cos_yaw * cos_yaw;
        let sin_yaw_sq = sin_yaw * sin_yaw;

        let pitch_norm = sin_pitch_sq + cos_pitch_sq;
        let yaw_norm = cos_yaw_sq + sin_yaw_sq;

        // Never zero for a real pitch/yaw pair.
        let determinant_inv =
            1.0 / (cos_yaw_sq * pitch_norm + sin_yaw_sq * pitch_norm);

        let x = (pitch_norm * eye.x * cos_yaw + sin_pitch * eye.y * sin_yaw
            - cos_pitch * sin_yaw * eye.z)
            * determinant_inv;
        let y = (cos_pitch * eye.y + sin_pitch * eye.z)
            * determinant_inv
            * yaw_norm;
        let z = (pitch_norm * eye.x * sin_yaw - sin_pitch * eye.y * cos_yaw
            + cos_pitch * cos_yaw * eye.z)
            * determinant_inv;

        Vec3::new(x, y, z)
    }

    /// World-space direction the camera looks along (camera-space `-Z`).
    #[must_use]
    pub fn forward(self) -> Vec3 {
        self.to_world(Vec3::NEG_Z)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f32) {
        assert!(a.abs_diff_eq(b, eps), "expected {b:?}, got {a:?}");
    }

    #[test]
    fn view_matrix_matches_composed_rotations() {
        let pitch = 37.0_f32;
        let yaw = 151.0_f32;
        let position = Vec3::new(3.0, 12.0, -40.0);

        let expected = Mat4::from_rotation_x(pitch.to_radians())
            * Mat4::from_rotation_y(yaw.to_radians())
            * Mat4::from_translation(-position);
        let actual =
            Orientation::from_degrees(pitch, yaw).view_matrix(position);

        assert!(actual.abs_diff_eq(expected, 1e-4), "{actual:?}");
    }

    #[test]
    fn view_matrix_moves_camera_to_origin() {
        let position = Vec3::new(-7.5, 20.0, 14.0);
        let view = Orientation::from_degrees(45.0, 30.0).view_matrix(position);
        assert_vec_close(view.transform_point3(position), Vec3::ZERO, 1e-4);
    }

    #[test]
    fn view_matrix_has_no_projective_row() {
        let m = Orientation::from_degrees(30.0, 60.0)
            .view_matrix(Vec3::ONE)
            .to_cols_array();
        assert_eq!(m[3], 0.0);
        assert_eq!(m[4], 0.0);
        assert_eq!(m[7], 0.0);
        assert_eq!(m[11], 0.0);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn to_view_matches_matrix_rotation() {
        let orientation = Orientation::from_degrees(50.0, -72.0);
        let view = orientation.view_matrix(Vec3::ZERO);
        let v = Vec3::new(0.3, -1.2, 2.5);
        assert_vec_close(
            orientation.to_view(v),
            view.transform_vector3(v),
            EPS,
        );
    }

    #[test]
    fn forward_round_trips_through_view() {
        let orientation = Orientation::from_degrees(22.5, 180.0);
        let forward = orientation.forward();
        assert_vec_close(orientation.to_view(forward), Vec3::NEG_Z, EPS);
    }

    #[test]
    fn forward_at_zero_yaw_looks_down_negative_z() {
        let forward = Orientation::from_degrees(0.0, 0.0).forward();
        assert_vec_close(forward, Vec3::NEG_Z, EPS);
    }

    #[test]
    fn forward_tilts_down_with_pitch() {
        let forward = Orientation::from_degrees(45.0, 0.0).forward();
        assert!(forward.y < 0.0);
        assert!((forward.y + 45.0_f32.to_radians().sin()).abs() < EPS);
    }

    proptest! {
        #[test]
        fn rotation_block_is_orthonormal(
            pitch in 22.5_f32..=67.5,
            yaw in -360.0_f32..360.0,
        ) {
            let view = Orientation::from_degrees(pitch, yaw)
                .view_matrix(Vec3::ZERO);
            let x = view.x_axis.truncate();
            let y = view.y_axis.truncate();
            let z = view.z_axis.truncate();

            prop_assert!((x.length() - 1.0).abs() < EPS);
            prop_assert!((y.length() - 1.0).abs() < EPS);
            prop_assert!((z.length() - 1.0).abs() < EPS);
            prop_assert!(x.dot(y).abs() < EPS);
            prop_assert!(y.dot(z).abs() < EPS);
            prop_assert!(z.dot(x).abs() < EPS);
        }

        #[test]
        fn to_world_inverts_to_view(
            pitch in 22.5_f32..=67.5,
            yaw in -360.0_f32..360.0,
            vx in -10.0_f32..10.0,
            vy in -10.0_f32..10.0,
            vz in -10.0_f32..10.0,
        ) {
            let orientation = Orientation::from_degrees(pitch, yaw);
            let v = Vec3::new(vx, vy, vz);
            let back = orientation.to_world(orientation.to_view(v));
            prop_assert!(back.abs_diff_eq(v, 1e-4), "{:?} -> {:?}", v, back);
        }
    }
}
