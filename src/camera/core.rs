use glam::{Mat4, Vec3};

use super::orientation::Orientation;
use super::projection::Projection;
use super::viewport::Viewport;
use crate::options::CameraOptions;
use crate::util::scalar::{clamp, cos, select_sign, sin, to_radians};

/// Key state sampled once per frame for the orbit camera.
///
/// When both keys of a pair are held, `up` and `right` win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OrbitInput {
    /// Tilt the camera further above the target.
    pub up: bool,
    /// Tilt the camera toward the horizon.
    pub down: bool,
    /// Orbit with increasing angle.
    pub right: bool,
    /// Orbit with decreasing angle.
    pub left: bool,
}

/// Third-person camera orbiting a target point.
///
/// Position and yaw are outputs of [`update`](Self::update): yaw is always
/// `180 - angle` and has no setter. Pitch is clamped to the configured range
/// on every tick that tilts the camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    /// Degrees above the horizon.
    pitch: f32,
    /// Degrees.
    yaw: f32,
    distance: f32,
    /// Orbit angle around the target in degrees.
    angle: f32,
    options: CameraOptions,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Camera {
    /// Create a camera at the origin with the configured starting orbit.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            position: Vec3::ZERO,
            pitch: options.pitch,
            yaw: 0.0,
            distance: options.distance,
            angle: options.angle,
            options: options.clone(),
        }
    }

    /// Advance the orbit by one frame.
    ///
    /// `zoom_delta` shortens the orbit distance (positive zooms in). The
    /// camera is then placed on the sphere around `target` described by its
    /// distance, pitch, and angle.
    pub fn update(&mut self, target: Vec3, zoom_delta: i32, input: OrbitInput) {
        self.distance -= zoom_delta as f32 * self.options.zoom_speed;

        if input.up || input.down {
            self.pitch += select_sign(input.up, self.options.pitch_step);
            let clamped = clamp(
                self.pitch,
                self.options.min_pitch,
                self.options.max_pitch,
            );
            if clamped != self.pitch {
                log::trace!("pitch {} clamped to {clamped}", self.pitch);
            }
            self.pitch = clamped;
        }

        if input.right || input.left {
            self.angle += select_sign(input.right, self.options.angle_step);
        }

        let pitch = to_radians(self.pitch);
        let angle = to_radians(self.angle);

        let horizontal_distance = self.distance * cos(pitch);
        let vertical_distance = self.distance * sin(pitch);

        self.position = Vec3::new(
            target.x - horizontal_distance * sin(angle),
            target.y + vertical_distance,
            target.z - horizontal_distance * cos(angle),
        );
        self.yaw = 180.0 - self.angle;
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Orbit distance from the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Orbit angle in degrees.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotation for the current pitch and yaw.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::from_degrees(self.pitch, self.yaw)
    }

    /// World-to-camera matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.orientation().view_matrix(self.position)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices, column-major.
pub struct CameraUniform {
    /// World-to-camera matrix.
    pub view: [[f32; 4]; 4],
    /// Perspective projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the camera's current state.
    pub fn update(
        &mut self,
        camera: &Camera,
        projection: &Projection,
        viewport: Viewport,
    ) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.projection = projection.matrix(viewport).to_cols_array_2d();
        self.position = camera.position().to_array();
        self.aspect = viewport.aspect_ratio();
        self.forward = camera.orientation().forward().normalize().to_array();
    }
}
