//! Shoemake arcball (Graphics Gems IV, III.1).
//!
//! Unless stated otherwise every position here is in the target coordinate
//! system (TCS). Screen coordinates (`x, y ∈ [-1, 1]`, origin at the
//! screen center, `+y` up) are carried into TCS by `screen_to_tcs`; with
//! the identity transform TCS *is* screen space.

use glam::{Mat4, Quat, Vec2, Vec3};

use crate::math::quat_from_unit_sphere;

/// Drag phase of the arcball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Between `begin_drag` and `end_drag`.
    Dragging,
}

/// Maps 2D pointer drags onto an accumulated 3D rotation.
///
/// Composition order is fixed: `q_now = q_drag * q_down`, the orientation
/// at drag start is applied first and the drag delta second.
#[derive(Debug, Clone)]
pub struct Arcball {
    center: Vec3,
    radius: f32,
    screen_to_tcs: Mat4,

    /// Current orientation including any in-progress drag.
    q_now: Quat,
    /// Orientation when the current drag began.
    q_down: Quat,
    /// Rotation contributed by the current drag alone.
    q_drag: Quat,

    /// TCS position of the pointer when the drag began.
    v_down: Vec3,
    /// Latest TCS position of the pointer.
    v_now: Vec3,
    /// `v_down` projected onto the sphere.
    sphere_from: Vec3,
    /// `v_now` projected onto the sphere.
    sphere_to: Vec3,

    mat_now: Mat4,
    mat_down: Mat4,

    state: DragState,
}

impl Default for Arcball {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, Mat4::IDENTITY)
    }
}

impl Arcball {
    /// Create an arcball with identity orientation.
    ///
    /// `center` and `radius` are in TCS. For plain screen coordinates the
    /// center is normally the origin and a radius around `0.75..1.0` feels
    /// natural.
    #[must_use]
    pub fn new(center: Vec3, radius: f32, screen_to_tcs: Mat4) -> Self {
        let mut ball = Self {
            center,
            radius,
            screen_to_tcs,
            q_now: Quat::IDENTITY,
            q_down: Quat::IDENTITY,
            q_drag: Quat::IDENTITY,
            v_down: Vec3::ZERO,
            v_now: Vec3::ZERO,
            sphere_from: Vec3::ZERO,
            sphere_to: Vec3::ZERO,
            mat_now: Mat4::IDENTITY,
            mat_down: Mat4::IDENTITY,
            state: DragState::Idle,
        };
        ball.initialize(center, radius, screen_to_tcs, Vec2::ZERO);
        ball
    }

    /// (Re)configure the sphere and anchor it at `initial_screen_point`.
    ///
    /// Orientation returns to identity and the arcball goes idle.
    pub fn initialize(
        &mut self,
        center: Vec3,
        radius: f32,
        screen_to_tcs: Mat4,
        initial_screen_point: Vec2,
    ) {
        self.center = center;
        self.radius = radius;
        self.screen_to_tcs = screen_to_tcs;
        self.set_orientation(Quat::IDENTITY);

        self.v_down = self.to_tcs(initial_screen_point);
        self.v_now = self.v_down;
        self.sphere_from = self.mouse_on_sphere(self.v_down);
        self.sphere_to = self.sphere_from;
    }

    /// Start a drag at `screen_point`.
    ///
    /// Whatever the previous drag produced becomes the new baseline, so
    /// consecutive drags chain. Calling this mid-drag simply re-anchors.
    pub fn begin_drag(&mut self, screen_point: Vec2) {
        self.q_down = self.q_now;
        self.q_drag = Quat::IDENTITY;
        self.mat_down = self.mat_now;

        self.v_down = self.to_tcs(screen_point);
        self.v_now = self.v_down;
        self.sphere_from = self.mouse_on_sphere(self.v_down);
        self.sphere_to = self.sphere_from;

        self.state = DragState::Dragging;
        log::trace!("arcball drag started at {screen_point}");
    }

    /// Move the drag to `screen_point`.
    ///
    /// The result depends only on the drag-start snapshot and this point,
    /// so repeating a call with the same point changes nothing. Without a
    /// prior `begin_drag` the snapshot is the last anchor and baseline.
    pub fn drag(&mut self, screen_point: Vec2) {
        self.v_now = self.to_tcs(screen_point);
        self.sphere_to = self.mouse_on_sphere(self.v_now);

        let from = (self.sphere_from - self.center).normalize_or_zero();
        let to = (self.sphere_to - self.center).normalize_or_zero();
        self.q_drag = quat_from_unit_sphere(from, to);
        self.q_now = self.q_drag * self.q_down;
        self.mat_now = Mat4::from_quat(self.q_now);
    }

    /// Finish the drag, folding it into the baseline orientation.
    pub fn end_drag(&mut self) {
        self.q_down = self.q_now;
        self.q_drag = Quat::IDENTITY;
        self.mat_down = self.mat_now;
        self.v_down = self.v_now;
        self.sphere_from = self.sphere_to;
        self.state = DragState::Idle;
        log::trace!("arcball drag ended");
    }

    /// Replace the orientation outright and go idle.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.q_now = orientation.normalize();
        self.q_down = self.q_now;
        self.q_drag = Quat::IDENTITY;
        self.mat_now = Mat4::from_quat(self.q_now);
        self.mat_down = self.mat_now;
        self.state = DragState::Idle;
    }

    /// Move or resize the sphere, keeping the orientation.
    ///
    /// The current rotation becomes the baseline and the anchor moves to the
    /// pointer's latest position, so a drag in progress continues without
    /// a jump.
    pub fn set_sphere(&mut self, center: Vec3, radius: f32) {
        self.center = center;
        self.radius = radius;

        self.q_down = self.q_now;
        self.q_drag = Quat::IDENTITY;
        self.mat_down = self.mat_now;
        self.v_down = self.v_now;
        self.sphere_from = self.mouse_on_sphere(self.v_down);
        self.sphere_to = self.sphere_from;
    }

    /// Return to identity orientation.
    pub fn reset(&mut self) {
        self.set_orientation(Quat::IDENTITY);
    }

    /// Rotation matrix of the current orientation.
    #[must_use]
    pub fn current_transform(&self) -> Mat4 {
        self.mat_now
    }

    /// Rotation matrix of the orientation at drag start.
    #[must_use]
    pub fn transform_at_drag_start(&self) -> Mat4 {
        self.mat_down
    }

    /// Project a TCS point onto the sphere.
    ///
    /// Points over the disk land on the front hemisphere; points outside it
    /// are pulled onto the equator. The result is absolute (TCS), at
    /// distance `radius` from `center`.
    #[must_use]
    pub fn mouse_on_sphere(&self, tcs_point: Vec3) -> Vec3 {
        let planar = Vec2::new(
            tcs_point.x - self.center.x,
            tcs_point.y - self.center.y,
        );
        let dist = planar.length();

        let offset = if dist <= self.radius {
            let z = (self.radius * self.radius - dist * dist).max(0.0).sqrt();
            planar.extend(z)
        } else {
            (planar * (self.radius / dist)).extend(0.0)
        };
        self.center + offset
    }

    /// Current drag phase.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Current orientation (`q_drag * q_down`).
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.q_now
    }

    /// Orientation when the current drag began.
    #[must_use]
    pub fn orientation_at_drag_start(&self) -> Quat {
        self.q_down
    }

    /// Rotation contributed by the current drag alone.
    #[must_use]
    pub fn drag_rotation(&self) -> Quat {
        self.q_drag
    }

    /// Drag-start point on the sphere (TCS).
    #[must_use]
    pub fn sphere_from(&self) -> Vec3 {
        self.sphere_from
    }

    /// Latest drag point on the sphere (TCS).
    #[must_use]
    pub fn sphere_to(&self) -> Vec3 {
        self.sphere_to
    }

    /// Sphere center (TCS).
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Sphere radius (TCS).
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    fn to_tcs(&self, screen_point: Vec2) -> Vec3 {
        self.screen_to_tcs.transform_point3(screen_point.extend(0.0))
    }
}
