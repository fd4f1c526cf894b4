//! Orbit camera and the matrices derived from it.
//!
//! Provides the third-person orbit camera, its view rotation and inverse,
//! the perspective projection, and mouse-ray unprojection for picking.

/// Orbit camera state and GPU uniform layout.
pub mod core;
/// View rotation and its hand-derived inverse.
pub mod orientation;
/// Perspective projection with a precomputed field-of-view scale.
pub mod projection;
/// Screen-to-world ray unprojection.
pub mod ray;
/// Viewport dimensions and normalized device coordinates.
pub mod viewport;

pub use self::core::{Camera, CameraUniform, OrbitInput};
pub use orientation::Orientation;
pub use projection::Projection;
pub use ray::{calculate_mouse_ray, Normalization, Ray};
pub use viewport::Viewport;
