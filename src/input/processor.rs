//! Converts raw pointer events into camera commands.
//!
//! The `InputRouter` owns the transient gesture state (which button started
//! the current drag) and the mapping from pixel coordinates to normalized
//! screen space. It is the only thing that sits between the platform event
//! source and [`CameraController::execute`](crate::camera::CameraController::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::camera::CameraCommand;

/// Pixel rectangle the pointer coordinates are measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Top-left corner in pixels.
    pub origin: Vec2,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Viewport anchored at the window origin.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            origin: Vec2::ZERO,
            width,
            height,
        }
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Map a pixel position to screen space: `[-1, 1]` on both axes with the
    /// origin at the center and `+y` up.
    ///
    /// Pixel `y` grows downward, so the vertical axis is flipped; rotations
    /// feel inverted without it.
    #[must_use]
    pub fn screen_coords(&self, pixel: Vec2) -> Vec2 {
        let x = 2.0 * (pixel.x - self.origin.x) / self.width as f32 - 1.0;
        let y = 2.0 * (pixel.y - self.origin.y) / self.height as f32 - 1.0;
        Vec2::new(x, -y)
    }
}

/// Converts pointer events into [`CameraCommand`]s.
///
/// Primary drags rotate, secondary drags pan, the wheel zooms. A move only
/// produces a command when it carries the button that started the drag.
/// One drag runs at a time: presses of another button are ignored until the
/// driving button is released.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = router.handle_event(event) {
///     controller.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputRouter {
    viewport: Viewport,
    /// Button that started the current drag.
    active_drag: Option<MouseButton>,
}

impl InputRouter {
    /// Create a router for the given viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            active_drag: None,
        }
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the viewport after a surface resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Button driving the current drag, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<MouseButton> {
        self.active_drag
    }

    /// Map a pixel position to screen space using the current viewport.
    #[must_use]
    pub fn screen_coords(&self, x: f32, y: f32) -> Vec2 {
        self.viewport.screen_coords(Vec2::new(x, y))
    }

    /// Process a raw pointer event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<CameraCommand> {
        if let InputEvent::Wheel { delta } = event {
            return Some(CameraCommand::Zoom { delta });
        }
        if self.viewport.is_degenerate() {
            log::warn!(
                "ignoring pointer event on {}x{} viewport",
                self.viewport.width,
                self.viewport.height
            );
            return None;
        }

        match event {
            InputEvent::ButtonDown { x, y, button } => {
                self.handle_button_down(self.screen_coords(x, y), button)
            }
            InputEvent::CursorMoved { x, y, button } => {
                self.handle_cursor_moved(self.screen_coords(x, y), button)
            }
            InputEvent::ButtonUp { button, .. } => self.handle_button_up(button),
            InputEvent::Wheel { .. } => None,
        }
    }

    fn handle_button_down(
        &mut self,
        screen: Vec2,
        button: MouseButton,
    ) -> Option<CameraCommand> {
        if let Some(active) = self.active_drag {
            log::debug!("ignoring {button:?} press during {active:?} drag");
            return None;
        }
        self.active_drag = Some(button);
        Some(match button {
            MouseButton::Primary => CameraCommand::BeginRotate { screen },
            MouseButton::Secondary => CameraCommand::BeginPan { screen },
        })
    }

    fn handle_cursor_moved(
        &mut self,
        screen: Vec2,
        button: Option<MouseButton>,
    ) -> Option<CameraCommand> {
        if button.is_none() || button != self.active_drag {
            return None;
        }
        match button {
            Some(MouseButton::Primary) => Some(CameraCommand::Rotate { screen }),
            Some(MouseButton::Secondary) => Some(CameraCommand::Pan { screen }),
            None => None,
        }
    }

    fn handle_button_up(&mut self, button: MouseButton) -> Option<CameraCommand> {
        if self.active_drag != Some(button) {
            return None;
        }
        self.active_drag = None;
        match button {
            MouseButton::Primary => Some(CameraCommand::EndDrag),
            MouseButton::Secondary => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraController;
    use crate::options::Options;
    use crate::uniforms::UniformTable;

    fn router() -> InputRouter {
        InputRouter::new(Viewport::new(640, 480))
    }

    #[test]
    fn center_pixel_maps_to_origin() {
        assert_eq!(router().screen_coords(320.0, 240.0), Vec2::ZERO);
    }

    #[test]
    fn corners_map_with_flipped_y() {
        let r = router();
        assert_eq!(r.screen_coords(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(r.screen_coords(640.0, 480.0), Vec2::new(1.0, -1.0));
        assert_eq!(r.screen_coords(480.0, 120.0), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn origin_offsets_the_mapping() {
        let viewport = Viewport {
            origin: Vec2::new(100.0, 50.0),
            width: 200,
            height: 100,
        };
        assert_eq!(viewport.screen_coords(Vec2::new(200.0, 100.0)), Vec2::ZERO);
    }

    #[test]
    fn primary_drag_rotates_then_ends() {
        let mut r = router();
        assert_eq!(
            r.handle_event(InputEvent::ButtonDown {
                x: 320.0,
                y: 240.0,
                button: MouseButton::Primary,
            }),
            Some(CameraCommand::BeginRotate { screen: Vec2::ZERO })
        );
        assert_eq!(r.active_drag(), Some(MouseButton::Primary));
        assert_eq!(
            r.handle_event(InputEvent::CursorMoved {
                x: 480.0,
                y: 240.0,
                button: Some(MouseButton::Primary),
            }),
            Some(CameraCommand::Rotate {
                screen: Vec2::new(0.5, 0.0)
            })
        );
        assert_eq!(
            r.handle_event(InputEvent::ButtonUp {
                x: 480.0,
                y: 240.0,
                button: MouseButton::Primary,
            }),
            Some(CameraCommand::EndDrag)
        );
        assert_eq!(r.active_drag(), None);
    }

    #[test]
    fn secondary_drag_pans() {
        let mut r = router();
        assert_eq!(
            r.handle_event(InputEvent::ButtonDown {
                x: 0.0,
                y: 0.0,
                button: MouseButton::Secondary,
            }),
            Some(CameraCommand::BeginPan {
                screen: Vec2::new(-1.0, 1.0)
            })
        );
        assert_eq!(
            r.handle_event(InputEvent::CursorMoved {
                x: 320.0,
                y: 240.0,
                button: Some(MouseButton::Secondary),
            }),
            Some(CameraCommand::Pan { screen: Vec2::ZERO })
        );
        assert_eq!(
            r.handle_event(InputEvent::ButtonUp {
                x: 320.0,
                y: 240.0,
                button: MouseButton::Secondary,
            }),
            None
        );
    }

    #[test]
    fn moves_without_matching_button_are_ignored() {
        let mut r = router();
        let hover = InputEvent::CursorMoved {
            x: 10.0,
            y: 10.0,
            button: None,
        };
        assert_eq!(r.handle_event(hover), None);

        let _ = r.handle_event(InputEvent::ButtonDown {
            x: 10.0,
            y: 10.0,
            button: MouseButton::Primary,
        });
        assert_eq!(
            r.handle_event(InputEvent::CursorMoved {
                x: 20.0,
                y: 20.0,
                button: Some(MouseButton::Secondary),
            }),
            None
        );
        assert_eq!(r.handle_event(hover), None);
    }

    #[test]
    fn overlapping_press_does_not_steal_drag() {
        let mut r = router();
        let mut ctl = CameraController::new(
            &Options::default(),
            640,
            480,
            UniformTable::new(),
        )
        .unwrap();

        let events = [
            InputEvent::ButtonDown {
                x: 320.0,
                y: 240.0,
                button: MouseButton::Primary,
            },
            InputEvent::CursorMoved {
                x: 400.0,
                y: 240.0,
                button: Some(MouseButton::Primary),
            },
            InputEvent::ButtonDown {
                x: 400.0,
                y: 240.0,
                button: MouseButton::Secondary,
            },
            InputEvent::ButtonUp {
                x: 400.0,
                y: 240.0,
                button: MouseButton::Primary,
            },
            InputEvent::ButtonUp {
                x: 400.0,
                y: 240.0,
                button: MouseButton::Secondary,
            },
        ];
        let commands: Vec<_> = events
            .into_iter()
            .filter_map(|event| r.handle_event(event))
            .collect();
        assert_eq!(commands.last(), Some(&CameraCommand::EndDrag));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, CameraCommand::BeginPan { .. })));

        for cmd in commands {
            ctl.execute(cmd);
        }
        assert_eq!(r.active_drag(), None);
        assert!(!ctl.arcball().is_dragging());
    }

    #[test]
    fn wheel_always_zooms() {
        let mut r = router();
        assert_eq!(
            r.handle_event(InputEvent::Wheel { delta: 120.0 }),
            Some(CameraCommand::Zoom { delta: 120.0 })
        );
        r.set_viewport(Viewport::new(0, 0));
        assert_eq!(
            r.handle_event(InputEvent::Wheel { delta: -120.0 }),
            Some(CameraCommand::Zoom { delta: -120.0 })
        );
    }

    #[test]
    fn degenerate_viewport_drops_pointer_events() {
        let mut r = InputRouter::new(Viewport::new(640, 0));
        assert_eq!(
            r.handle_event(InputEvent::ButtonDown {
                x: 1.0,
                y: 1.0,
                button: MouseButton::Primary,
            }),
            None
        );
        assert_eq!(r.active_drag(), None);
    }

    #[test]
    fn routed_gesture_drives_controller() {
        let mut r = router();
        let mut ctl = CameraController::new(
            &Options::default(),
            640,
            480,
            UniformTable::new(),
        )
        .unwrap();

        let events = [
            InputEvent::ButtonDown {
                x: 320.0,
                y: 240.0,
                button: MouseButton::Primary,
            },
            InputEvent::CursorMoved {
                x: 480.0,
                y: 240.0,
                button: Some(MouseButton::Primary),
            },
            InputEvent::ButtonUp {
                x: 480.0,
                y: 240.0,
                button: MouseButton::Primary,
            },
            InputEvent::Wheel { delta: 100.0 },
        ];
        for event in events {
            if let Some(cmd) = r.handle_event(event) {
                ctl.execute(cmd);
            }
        }

        let (axis, _) = ctl.arcball().orientation().to_axis_angle();
        assert!((axis - glam::Vec3::Y).length() < 1.0e-5);
        assert_eq!(ctl.distance(), 6.0);
        assert!(!ctl.arcball().is_dragging());
    }
}
