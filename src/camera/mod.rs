//! Camera system for interactive 3D viewing.
//!
//! Provides an arcball rotation controller, a view/projection camera that
//! publishes its uniforms to a sink, and an orbit controller composing
//! rotation, pan, and dolly into the final view transform.

/// Shoemake arcball mapping pointer drags to rotations.
pub mod arcball;
/// Commands accepted by the camera controller.
pub mod command;
/// Orbit controller managing rotation, pan, and zoom.
pub mod controller;
/// Core camera struct and GPU uniform block.
pub mod core;

pub use arcball::{Arcball, DragState};
pub use command::CameraCommand;
pub use controller::CameraController;
pub use self::core::{Camera, CameraUniform, Projection};
