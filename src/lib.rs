// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Camera and matrix math for a small third-person 3D game.
//!
//! Orbitcam turns per-frame input into an orbiting camera, builds the view,
//! projection, and model matrices the renderer uploads, and unprojects mouse
//! clicks into world-space rays for picking.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the orbit camera, updated once per frame
//! - [`camera::Projection`] - perspective parameters with a precomputed
//!   field-of-view scale
//! - [`camera::calculate_mouse_ray`] - screen position to world direction
//! - [`transform::transformation_matrix`] - model matrices
//! - [`options::Options`] - TOML configuration (camera feel, projection,
//!   picking)
//!
//! # Conventions
//!
//! Matrices are `glam::Mat4`, column-major; `to_cols_array()` gives the
//! flattened 16-float layout (index = column * 4 + row) expected by the
//! renderer's uniforms. Angles at the API surface are degrees. Nothing here
//! is synchronized: the game loop owns its camera and hands out copies of the
//! derived matrices.

pub mod camera;
pub mod error;
pub mod options;
pub mod transform;
pub mod util;

pub use camera::{Camera, Projection, Viewport};
pub use error::OrbitError;
