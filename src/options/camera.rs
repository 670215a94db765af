use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which projection the camera starts with.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Symmetric perspective frustum.
    #[default]
    Perspective,
    /// Symmetric orthographic box.
    Orthographic,
}

/// Clip-space depth range produced by the projection matrices.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ClipDepth {
    /// `[0, 1]` (wgpu, Vulkan, Metal, D3D).
    ZeroToOne,
    /// `[-1, 1]` (OpenGL).
    #[default]
    NegativeOneToOne,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and pose parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Perspective or orthographic projection.
    #[schemars(title = "Projection")]
    pub projection: ProjectionMode,
    /// Orthographic half-extent along x.
    #[schemars(title = "Ortho Half Width", range(min = 0.01, max = 1000.0))]
    pub ortho_half_width: f32,
    /// Orthographic half-extent along y.
    #[schemars(title = "Ortho Half Height", range(min = 0.01, max = 1000.0))]
    pub ortho_half_height: f32,
    /// Depth range convention of the target graphics API.
    #[schemars(skip)]
    pub clip_depth: ClipDepth,
    /// Camera distance from the orbit center at startup and on reset.
    #[schemars(title = "Initial Distance", range(min = 0.0, max = 1000.0), extend("step" = 0.5))]
    pub initial_distance: f32,
    /// Zooming never brings the camera closer than this.
    #[schemars(skip)]
    pub min_distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            projection: ProjectionMode::Perspective,
            ortho_half_width: 1.0,
            ortho_half_height: 1.0,
            clip_depth: ClipDepth::NegativeOneToOne,
            initial_distance: 7.0,
            min_distance: 0.0,
        }
    }
}
