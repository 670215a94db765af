
use glam::{Mat4, Vec3};

use crate::error::ArcviewError;
use crate::math::affine_inverse;
use crate::options::{CameraOptions, ClipDepth, ProjectionMode};
use crate::uniforms::{UniformBatch, UniformSink};

/// Projection currently installed on a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Symmetric perspective frustum.
    Perspective {
        /// Vertical field of view in radians.
        fovy: f32,
        /// Viewport aspect ratio (width / height).
        aspect: f32,
    },
    /// Symmetric orthographic box.
    Orthographic {
        /// Half-extent along x.
        half_width: f32,
        /// Half-extent along y.
        half_height: f32,
    },
}

impl Projection {
    /// Perspective or orthographic.
    #[must_use]
    pub const fn mode(&self) -> ProjectionMode {
        match self {
            Self::Perspective { .. } => ProjectionMode::Perspective,
            Self::Orthographic { .. } => ProjectionMode::Orthographic,
        }
    }

    /// Build the projection matrix for the given clip planes.
    #[must_use]
    pub fn matrix(&self, znear: f32, zfar: f32, clip_depth: ClipDepth) -> Mat4 {
        match (*self, clip_depth) {
            (Self::Perspective { fovy, aspect }, ClipDepth::ZeroToOne) => {
                Mat4::perspective_rh(fovy, aspect, znear, zfar)
            }
            (Self::Perspective { fovy, aspect }, ClipDepth::NegativeOneToOne) => {
                Mat4::perspective_rh_gl(fovy, aspect, znear, zfar)
            }
            (
                Self::Orthographic {
                    half_width,
                    half_height,
                },
                ClipDepth::ZeroToOne,
            ) => Mat4::orthographic_rh(
                -half_width,
                half_width,
                -half_height,
                half_height,
                znear,
                zfar,
            ),
            (
                Self::Orthographic {
                    half_width,
                    half_height,
                },
                ClipDepth::NegativeOneToOne,
            ) => Mat4::orthographic_rh_gl(
                -half_width,
                half_width,
                -half_height,
                half_height,
                znear,
                zfar,
            ),
        }
    }
}

/// View and projection state for one rendering surface.
///
/// The view matrix is camera → world. Its affine inverse and the combined
/// `projection * inverse_view` are recomputed together with it, and every
/// change is published to the sink as one complete batch.
pub struct Camera<S: UniformSink> {
    projection: Projection,
    znear: f32,
    zfar: f32,
    clip_depth: ClipDepth,

    proj: Mat4,
    view: Mat4,
    inverse_view: Mat4,
    proj_iv: Mat4,

    /// Incremented on every view transform update.
    transform_seq: u64,

    sink: S,
}

impl<S: UniformSink> Camera<S> {
    /// Create a camera for a `width` x `height` pixel surface.
    ///
    /// The initial view sits `options.initial_distance` along `+z` looking
    /// down `-z` at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::DegenerateViewport`] for a perspective
    /// camera on a surface with zero width or height.
    pub fn new(
        options: &CameraOptions,
        width: u32,
        height: u32,
        sink: S,
    ) -> Result<Self, ArcviewError> {
        let mut camera = Self {
            projection: Projection::Perspective {
                fovy: options.fovy.to_radians(),
                aspect: 1.0,
            },
            znear: options.znear,
            zfar: options.zfar,
            clip_depth: options.clip_depth,
            proj: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            inverse_view: Mat4::IDENTITY,
            proj_iv: Mat4::IDENTITY,
            transform_seq: 0,
            sink,
        };
        camera.apply_options(options, width, height)?;
        camera.set_view_transform(Mat4::from_translation(Vec3::new(
            0.0,
            0.0,
            options.initial_distance,
        )));
        Ok(camera)
    }

    /// Re-install the projection described by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::DegenerateViewport`] when a perspective
    /// projection is requested for a zero-area surface.
    pub fn apply_options(
        &mut self,
        options: &CameraOptions,
        width: u32,
        height: u32,
    ) -> Result<(), ArcviewError> {
        self.clip_depth = options.clip_depth;
        match options.projection {
            ProjectionMode::Perspective => self.set_perspective(
                options.fovy.to_radians(),
                width,
                height,
                options.znear,
                options.zfar,
            ),
            ProjectionMode::Orthographic => {
                self.set_orthographic(
                    options.ortho_half_width,
                    options.ortho_half_height,
                    options.znear,
                    options.zfar,
                );
                Ok(())
            }
        }
    }

    /// Install a symmetric perspective projection.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::DegenerateViewport`] if either dimension is
    /// zero; the camera is left unchanged.
    pub fn set_perspective(
        &mut self,
        fovy: f32,
        width: u32,
        height: u32,
        znear: f32,
        zfar: f32,
    ) -> Result<(), ArcviewError> {
        if width == 0 || height == 0 {
            log::warn!("rejecting perspective for {width}x{height} surface");
            return Err(ArcviewError::DegenerateViewport { width, height });
        }
        let aspect = width as f32 / height as f32;
        self.install_projection(Projection::Perspective { fovy, aspect }, znear, zfar);
        Ok(())
    }

    /// Install a symmetric orthographic projection over
    /// `[-half_width, half_width] x [-half_height, half_height]`.
    pub fn set_orthographic(
        &mut self,
        half_width: f32,
        half_height: f32,
        znear: f32,
        zfar: f32,
    ) {
        self.install_projection(
            Projection::Orthographic {
                half_width,
                half_height,
            },
            znear,
            zfar,
        );
    }

    /// Recompute the perspective aspect ratio for a new surface size.
    /// Orthographic extents are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::DegenerateViewport`] for a zero-area
    /// surface while in perspective mode.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ArcviewError> {
        match self.projection {
            Projection::Perspective { fovy, .. } => {
                self.set_perspective(fovy, width, height, self.znear, self.zfar)
            }
            Projection::Orthographic { .. } => Ok(()),
        }
    }

    /// Set the camera → world transform.
    ///
    /// `view` must be a rigid or similarity transform; its inverse is taken
    /// with [`affine_inverse`] and is garbage for anything else.
    pub fn set_view_transform(&mut self, view: Mat4) {
        self.transform_seq += 1;

        self.view = view;
        self.inverse_view = affine_inverse(view);
        self.proj_iv = self.proj * self.inverse_view;

        log::debug!(
            "view transform #{}: eye at {}",
            self.transform_seq,
            self.view.w_axis.truncate()
        );
        self.publish();
    }

    /// The five camera uniforms for the current state.
    #[must_use]
    pub fn uniforms(&self) -> UniformBatch {
        UniformBatch {
            transform_seq: self.transform_seq,
            projection_inverse_view: self.proj_iv,
            projection: self.proj,
            view: self.view,
            view_dir: self.view_dir(),
            up: self.up(),
        }
    }

    /// World-space direction the camera looks along (its local `-z`).
    #[must_use]
    pub fn view_dir(&self) -> Vec3 {
        -self.view.z_axis.truncate()
    }

    /// World-space camera up vector (its local `+y`).
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.view.y_axis.truncate()
    }

    /// Camera → world matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// World → camera matrix.
    #[must_use]
    pub fn inverse_view(&self) -> Mat4 {
        self.inverse_view
    }

    /// Projection matrix.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.proj
    }

    /// `projection * inverse_view`.
    #[must_use]
    pub fn projection_inverse_view(&self) -> Mat4 {
        self.proj_iv
    }

    /// Current projection parameters.
    #[must_use]
    pub fn projection_params(&self) -> Projection {
        self.projection
    }

    /// Perspective or orthographic.
    #[must_use]
    pub fn projection_mode(&self) -> ProjectionMode {
        self.projection.mode()
    }

    /// Near and far clip distances.
    #[must_use]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    /// Number of view transform updates so far.
    #[must_use]
    pub fn transform_seq(&self) -> u64 {
        self.transform_seq
    }

    /// The uniform sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the uniform sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn install_projection(&mut self, projection: Projection, znear: f32, zfar: f32) {
        self.projection = projection;
        self.znear = znear;
        self.zfar = zfar;
        self.proj = projection.matrix(znear, zfar, self.clip_depth);
        self.proj_iv = self.proj * self.inverse_view;

        log::debug!("projection set to {projection:?} ({znear}..{zfar})");
        self.publish();
    }

    fn publish(&mut self) {
        let batch = self.uniforms();
        self.sink.submit(batch);
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block mirroring the five camera uniforms.
pub struct CameraUniform {
    /// `projection * inverse_view`.
    pub proj_iv: [[f32; 4]; 4],
    /// Projection matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera → world matrix.
    pub view: [[f32; 4]; 4],
    /// World-space view direction.
    pub view_dir: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// World-space up vector.
    pub up: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(size_of::<CameraUniform>() == 224);

impl Default for CameraUniform {
    fn default() -> Self {
        Self::from(&UniformBatch {
            transform_seq: 0,
            projection_inverse_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            view_dir: Vec3::NEG_Z,
            up: Vec3::Y,
        })
    }
}

impl From<&UniformBatch> for CameraUniform {
    fn from(batch: &UniformBatch) -> Self {
        Self {
            proj_iv: batch.projection_inverse_view.to_cols_array_2d(),
            proj: batch.projection.to_cols_array_2d(),
            view: batch.view.to_cols_array_2d(),
            view_dir: batch.view_dir.to_array(),
            _pad0: 0.0,
            up: batch.up.to_array(),
            _pad1: 0.0,
        }
    }
}

impl CameraUniform {
    /// Snapshot the given camera's current uniforms.
    pub fn from_camera<S: UniformSink>(camera: &Camera<S>) -> Self {
        Self::from(&camera.uniforms())
    }
}
