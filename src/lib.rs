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
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on known-good setup
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Interactive 3D camera control for scientific visualization.
//!
//! An arcball turns 2D pointer drags into stable 3D rotations; a camera
//! owns the view and projection matrices and publishes the values shaders
//! need to a uniform sink.
//!
//! # Key entry points
//!
//! - [`camera::Arcball`] - Shoemake arcball rotation controller
//! - [`camera::Camera`] - view/projection state and uniform publication
//! - [`camera::CameraController`] - orbit, pan, and dolly composed into the
//!   view transform
//! - [`input::InputRouter`] - pixel events → normalized screen space →
//!   [`camera::CameraCommand`]
//! - [`uniforms`] - the named uniform slots and sink implementations
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Data flow
//!
//! Every pointer event is handled to completion on the thread that receives
//! it. The controller rebuilds the view transform from scratch, the camera
//! derives its inverse and the combined matrix, and one complete
//! [`uniforms::UniformBatch`] is handed to the sink. A render thread can
//! receive batches through [`uniforms::uniform_channel`] without ever
//! blocking the input thread.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod uniforms;

pub use error::ArcviewError;
