use glam::{Mat4, Vec2, Vec3};

use super::arcball::Arcball;
use super::command::CameraCommand;
use super::core::Camera;
use crate::error::ArcviewError;
use crate::options::{InputOptions, Options};
use crate::uniforms::UniformSink;

/// Orbit camera driven by an arcball, with pan and dolly.
///
/// The final view transform is rebuilt from scratch after every change:
/// the arcball rotation, then a dolly of `distance` along the rotated `+z`,
/// then the accumulated pan.
pub struct CameraController<S: UniformSink> {
    camera: Camera<S>,
    arcball: Arcball,

    distance: f32,
    initial_distance: f32,
    min_distance: f32,

    /// Accumulated pan, world space.
    pan_now: Vec3,
    /// `pan_now` when the current gesture began.
    pan_down: Vec3,
    /// Screen position where the current gesture began.
    click: Vec2,

    input: InputOptions,
}

impl<S: UniformSink> CameraController<S> {
    /// Create a controller for a `width` x `height` pixel surface and apply
    /// the initial view.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::InvalidOption`] if `options` fail
    /// [`Options::validate`], or [`ArcviewError::DegenerateViewport`] for a
    /// perspective camera on a zero-area surface.
    pub fn new(
        options: &Options,
        width: u32,
        height: u32,
        sink: S,
    ) -> Result<Self, ArcviewError> {
        options.validate()?;
        let camera = Camera::new(&options.camera, width, height, sink)?;
        let arcball = Arcball::new(
            Vec3::from_array(options.arcball.center),
            options.arcball.radius,
            Mat4::IDENTITY,
        );

        let mut controller = Self {
            camera,
            arcball,
            distance: options.camera.initial_distance,
            initial_distance: options.camera.initial_distance,
            min_distance: options.camera.min_distance,
            pan_now: Vec3::ZERO,
            pan_down: Vec3::ZERO,
            click: Vec2::ZERO,
            input: options.input.clone(),
        };
        controller.build_and_apply_camera_transform();
        Ok(controller)
    }

    /// Apply a camera command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::BeginRotate { screen } => {
                self.begin_gesture(screen);
                self.arcball.begin_drag(screen);
            }
            CameraCommand::Rotate { screen } => self.rotate(screen),
            CameraCommand::BeginPan { screen } => self.begin_gesture(screen),
            CameraCommand::Pan { screen } => self.pan(screen),
            CameraCommand::Zoom { delta } => self.zoom(delta),
            CameraCommand::EndDrag => self.arcball.end_drag(),
        }
    }

    /// Drag the arcball to `screen` and update the view.
    pub fn rotate(&mut self, screen: Vec2) {
        self.arcball.drag(screen);
        self.build_and_apply_camera_transform();
    }

    /// Pan by the screen offset between the gesture start and `screen`.
    ///
    /// The offset is measured in the camera's current right/up axes, so a
    /// drag moves the scene the way the pointer moves.
    pub fn pan(&mut self, screen: Vec2) {
        let delta = screen - self.click;
        let trans = -delta * self.input.pan_sensitivity;

        let rotation = self.arcball.current_transform();
        let offset = rotation.x_axis.truncate() * trans.x
            + rotation.y_axis.truncate() * trans.y;
        self.pan_now = self.pan_down + offset;
        self.build_and_apply_camera_transform();
    }

    /// Dolly by a raw wheel delta.
    pub fn zoom(&mut self, delta: f32) {
        let step = delta / self.input.wheel_step * self.input.zoom_direction.sign();
        let distance = self.distance - step;
        if distance < self.min_distance {
            log::debug!("zoom clamped at distance {}", self.min_distance);
        }
        self.distance = distance.max(self.min_distance);
        self.build_and_apply_camera_transform();
    }

    /// Compose rotation, dolly, and pan into the camera's view transform.
    pub fn build_and_apply_camera_transform(&mut self) {
        let rotation = self.arcball.current_transform();
        let mut view = rotation;

        // Looking down -z: the dolly pushes the eye out along the rotated +z.
        let eye = self.pan_now + rotation.z_axis.truncate() * self.distance;
        view.w_axis = eye.extend(1.0);

        self.camera.set_view_transform(view);
    }

    /// Recompute the projection for a new surface size.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::DegenerateViewport`] for a zero-area surface
    /// in perspective mode.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ArcviewError> {
        self.camera.resize(width, height)
    }

    /// Adopt new options: projection, arcball sphere, and input policy.
    /// The current orientation, pan, and distance are kept, and a drag in
    /// progress continues from the pointer's current position.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::InvalidOption`] if `options` fail
    /// [`Options::validate`], or [`ArcviewError::DegenerateViewport`] for a
    /// perspective projection on a zero-area surface. Nothing changes on
    /// error.
    pub fn set_options(
        &mut self,
        options: &Options,
        width: u32,
        height: u32,
    ) -> Result<(), ArcviewError> {
        options.validate()?;
        self.camera.apply_options(&options.camera, width, height)?;

        self.arcball
            .set_sphere(Vec3::from_array(options.arcball.center), options.arcball.radius);

        self.initial_distance = options.camera.initial_distance;
        self.min_distance = options.camera.min_distance;
        self.distance = self.distance.max(self.min_distance);
        self.input = options.input.clone();
        self.build_and_apply_camera_transform();
        Ok(())
    }

    /// Return to identity orientation, no pan, and the initial distance.
    pub fn reset_view(&mut self) {
        self.arcball.reset();
        self.pan_now = Vec3::ZERO;
        self.pan_down = Vec3::ZERO;
        self.distance = self.initial_distance;
        self.build_and_apply_camera_transform();
    }

    /// Distance from the orbit center along the view axis.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Accumulated pan offset, world space.
    #[must_use]
    pub fn pan_offset(&self) -> Vec3 {
        self.pan_now
    }

    /// The rotation controller.
    #[must_use]
    pub fn arcball(&self) -> &Arcball {
        &self.arcball
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera<S> {
        &self.camera
    }

    /// Mutable access to the camera, e.g. to drain its sink.
    ///
    /// A view set directly on the camera is replaced by the next gesture.
    pub fn camera_mut(&mut self) -> &mut Camera<S> {
        &mut self.camera
    }

    fn begin_gesture(&mut self, screen: Vec2) {
        self.pan_down = self.pan_now;
        self.click = screen;
    }
}
