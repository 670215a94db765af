//! The camera controller's interactive vocabulary.
//!
//! Pointer gestures are turned into `CameraCommand`s by the
//! [`InputRouter`](crate::input::InputRouter); applications may also build
//! them directly and hand them to
//! [`CameraController::execute`](super::controller::CameraController::execute).

use glam::Vec2;

/// A camera manipulation request. Screen positions are normalized
/// (`[-1, 1]` on both axes, `+y` up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Start an arcball rotation at `screen`.
    BeginRotate {
        /// Pointer position at press.
        screen: Vec2,
    },
    /// Continue the arcball rotation to `screen`.
    Rotate {
        /// Current pointer position.
        screen: Vec2,
    },
    /// Start panning at `screen`.
    BeginPan {
        /// Pointer position at press.
        screen: Vec2,
    },
    /// Pan by the offset between the press position and `screen`.
    Pan {
        /// Current pointer position.
        screen: Vec2,
    },
    /// Dolly along the view axis by a wheel delta.
    Zoom {
        /// Raw wheel delta (typically multiples of 120 or 100 per notch).
        delta: f32,
    },
    /// Finish the current rotation.
    EndDrag,
}
