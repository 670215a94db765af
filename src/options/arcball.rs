use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Arcball", inline)]
#[serde(default)]
/// Virtual sphere used for rotation, in screen coordinates.
pub struct ArcballOptions {
    /// Sphere center. `z` moves it in and out of the screen plane.
    #[schemars(skip)]
    pub center: [f32; 3],
    /// Sphere radius; drags outside it clamp to the equator.
    #[schemars(title = "Radius", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub radius: f32,
}

impl Default for ArcballOptions {
    fn default() -> Self {
        Self {
            center: [0.0; 3],
            radius: 1.0,
        }
    }
}
