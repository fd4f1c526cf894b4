//! Shared numeric helpers for the camera and matrix builders.

pub mod scalar;
