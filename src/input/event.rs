/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputRouter`](super::InputRouter) which converts
/// them into [`CameraCommand`](crate::camera::CameraCommand) values.
/// Positions are in pixels relative to the window, `+y` down.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = router.handle_event(InputEvent::CursorMoved {
///     x: 100.0,
///     y: 200.0,
///     button: Some(MouseButton::Primary),
/// }) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed.
    ButtonDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Which button.
        button: MouseButton,
    },
    /// The pointer moved.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Button held during the move, if any.
        button: Option<MouseButton>,
    },
    /// A button was released.
    ButtonUp {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Which button.
        button: MouseButton,
    },
    /// Scroll wheel.
    Wheel {
        /// Wheel delta; positive is away from the user.
        delta: f32,
    },
}

/// Pointer buttons the camera responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) button: rotate.
    Primary,
    /// Secondary (right) button: pan.
    Secondary,
}

#[cfg(feature = "winit")]
impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = winit::event::MouseButton;

    fn try_from(button: winit::event::MouseButton) -> Result<Self, Self::Error> {
        match button {
            winit::event::MouseButton::Left => Ok(Self::Primary),
            winit::event::MouseButton::Right => Ok(Self::Secondary),
            other => Err(other),
        }
    }
}

#[cfg(all(test, feature = "winit"))]
mod tests {
    use super::*;

    #[test]
    fn winit_buttons_map_to_closed_set() {
        assert_eq!(
            MouseButton::try_from(winit::event::MouseButton::Left),
            Ok(MouseButton::Primary)
        );
        assert_eq!(
            MouseButton::try_from(winit::event::MouseButton::Right),
            Ok(MouseButton::Secondary)
        );
        assert!(MouseButton::try_from(winit::event::MouseButton::Middle).is_err());
    }
}
