//! Scalar helpers shared by the camera and matrix builders.
//!
//! These are thin wrappers over the standard float primitives, plus the
//! bit-trick inverse square root the ray normalizer relies on. Keeping every
//! call site on these wrappers means the camera, projection, and ray code all
//! round the same way.

/// Degrees-to-radians factor, computed in double precision and narrowed once.
const PI_180: f32 = (std::f64::consts::PI / 180.0) as f32;

/// Magic constant for the inverse square root initial guess (Lomont).
const INV_SQRT_MAGIC: u32 = 0x5f37_5a86;

/// Convert degrees to radians.
#[inline]
#[must_use]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI_180
}

/// Sine of an angle in radians, evaluated in double precision and narrowed.
///
/// `f32::sin` can land one ulp away from the narrowed double result, which
/// shifts view matrices and picking rays off the renderer's values.
#[inline]
#[must_use]
pub fn sin(radians: f32) -> f32 {
    f64::from(radians).sin() as f32
}

/// Cosine of an angle in radians, evaluated in double precision and narrowed.
#[inline]
#[must_use]
pub fn cos(radians: f32) -> f32 {
    f64::from(radians).cos() as f32
}

/// Tangent of an angle in radians, in double precision.
///
/// Only used when a [`Projection`](crate::camera::Projection) precomputes its
/// horizontal scale, so the extra precision costs nothing per frame.
#[inline]
#[must_use]
pub fn tan(radians: f64) -> f64 {
    radians.tan()
}

/// Mathematical floor: rounds toward negative infinity, so `-1.5` gives `-2`.
///
/// Values outside the `i32` range saturate.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let truncated = value as i32;
    if value < f64::from(truncated) {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Fast approximate `1 / sqrt(x)`.
///
/// Reinterprets the float's bits, subtracts the halved pattern from a magic
/// constant, and applies one Newton-Raphson step. Relative error stays under
/// roughly 0.18%, which is fine for normalizing view rays but not for
/// anything precision critical.
///
/// `x` must be positive. Zero yields a huge finite value and negative inputs
/// yield garbage; neither panics.
#[inline]
#[must_use]
pub fn inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let guess = f32::from_bits(INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    guess * (1.5 - half * guess * guess)
}

/// Approximate square root derived from [`inv_sqrt`].
///
/// Carries the same approximation error as [`inv_sqrt`]. Use `f32::sqrt`
/// where exact lengths matter.
#[inline]
#[must_use]
pub fn sqrt(x: f32) -> f32 {
    1.0 / inv_sqrt(x)
}

/// Bound `value` to `[min, max]` inclusive.
///
/// Unlike `f32::clamp` this never panics: inverted bounds return `min` for
/// anything below it and `max` otherwise.
#[inline]
#[must_use]
#[allow(clippy::manual_clamp)]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// `value` when `positive` is set, `-value` otherwise.
///
/// Used for stepping a parameter up or down depending on which of a key pair
/// is held.
#[inline]
#[must_use]
pub fn select_sign(positive: bool, value: f32) -> f32 {
    if positive {
        value
    } else {
        -value
    }
}
