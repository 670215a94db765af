use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which way a positive wheel delta moves the camera.
///
/// This is a matter of taste, not geometry, so it is configurable.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    /// Positive delta shrinks the camera distance.
    #[default]
    ScrollUpMovesCloser,
    /// Positive delta grows the camera distance.
    ScrollUpMovesAway,
}

impl ZoomDirection {
    /// Sign applied to a wheel delta before it is subtracted from the
    /// camera distance.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::ScrollUpMovesCloser => 1.0,
            Self::ScrollUpMovesAway => -1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer gesture sensitivities.
pub struct InputOptions {
    /// World units of pan per unit of screen-space drag.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub pan_sensitivity: f32,
    /// Wheel delta corresponding to one world unit of zoom.
    #[schemars(skip)]
    pub wheel_step: f32,
    /// Zoom direction policy.
    #[schemars(title = "Zoom Direction")]
    pub zoom_direction: ZoomDirection,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            pan_sensitivity: 2.5,
            wheel_step: 100.0,
            zoom_direction: ZoomDirection::ScrollUpMovesCloser,
        }
    }
}
