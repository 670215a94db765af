//! Camera, arcball, and input options with TOML preset support.
//!
//! Options serialize to/from TOML so interaction presets can be stored
//! alongside an application's other settings.

mod arcball;
mod camera;
mod input;

use std::path::Path;

pub use arcball::ArcballOptions;
pub use camera::{CameraOptions, ClipDepth, ProjectionMode};
pub use input::{InputOptions, ZoomDirection};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ArcviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[input]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Projection and pose parameters.
    pub camera: CameraOptions,
    /// Virtual sphere parameters.
    pub arcball: ArcballOptions,
    /// Gesture sensitivities.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::Io`] if the file cannot be read,
    /// [`ArcviewError::OptionsParse`] for malformed TOML, and
    /// [`ArcviewError::InvalidOption`] for out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ArcviewError> {
        let content = std::fs::read_to_string(path).map_err(ArcviewError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check the values that feed zoom and pan arithmetic.
    ///
    /// `wheel_step` must be positive and `min_distance` non-negative, both
    /// finite, so a wheel event can never produce a non-finite distance.
    ///
    /// # Errors
    ///
    /// Returns [`ArcviewError::InvalidOption`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ArcviewError> {
        check("input.wheel_step", self.input.wheel_step, |v| v > 0.0)?;
        check("input.pan_sensitivity", self.input.pan_sensitivity, |_| true)?;
        check("camera.min_distance", self.camera.min_distance, |v| v >= 0.0)?;
        check("camera.initial_distance", self.camera.initial_distance, |v| {
            v >= 0.0
        })?;
        check("arcball.radius", self.arcball.radius, |v| v > 0.0)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArcviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcviewError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

fn check(
    name: &'static str,
    value: f32,
    in_range: fn(f32) -> bool,
) -> Result<(), ArcviewError> {
    if value.is_finite() && in_range(value) {
        Ok(())
    } else {
        Err(ArcviewError::InvalidOption { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[input]
zoom_direction = "scroll_up_moves_away"

[camera]
projection = "orthographic"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.input.zoom_direction, ZoomDirection::ScrollUpMovesAway);
        assert_eq!(opts.camera.projection, ProjectionMode::Orthographic);
        // Everything else should be default
        assert_eq!(opts.input.wheel_step, 100.0);
        assert_eq!(opts.camera.initial_distance, 7.0);
        assert_eq!(opts.arcball, ArcballOptions::default());
    }

    #[test]
    fn malformed_toml_is_options_parse_error() {
        let dir = std::env::temp_dir().join("arcview-options-malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, ArcviewError::OptionsParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("arcview-does-not-exist.toml");
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, ArcviewError::Io(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir().join("arcview-options-presets");
        let _ = std::fs::remove_dir_all(&dir);

        let mut opts = Options::default();
        opts.arcball.radius = 0.75;
        opts.camera.clip_depth = ClipDepth::ZeroToOne;
        opts.save(&dir.join("orbit.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "not a preset").unwrap();

        let loaded = Options::load(&dir.join("orbit.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "orbit"]);
    }

    #[test]
    fn validate_rejects_values_that_break_zoom() {
        assert!(Options::default().validate().is_ok());

        let mut opts = Options::default();
        opts.input.wheel_step = 0.0;
        assert!(matches!(
            opts.validate(),
            Err(ArcviewError::InvalidOption {
                name: "input.wheel_step",
                ..
            })
        ));

        let mut opts = Options::default();
        opts.camera.min_distance = -5.0;
        assert!(matches!(
            opts.validate(),
            Err(ArcviewError::InvalidOption {
                name: "camera.min_distance",
                ..
            })
        ));

        let mut opts = Options::default();
        opts.input.pan_sensitivity = f32::NAN;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn load_rejects_zero_wheel_step() {
        let dir = std::env::temp_dir().join("arcview-options-invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("zero_step.toml");
        std::fs::write(&path, "[input]\nwheel_step = 0.0\n").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(
            err,
            ArcviewError::InvalidOption {
                name: "input.wheel_step",
                ..
            }
        ));
    }

    #[test]
    fn zoom_direction_signs() {
        assert_eq!(ZoomDirection::ScrollUpMovesCloser.sign(), 1.0);
        assert_eq!(ZoomDirection::ScrollUpMovesAway.sign(), -1.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("arcball"));
        assert!(props.contains_key("input"));

        // Exposed fields present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("initial_distance").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("clip_depth").is_none());

        let arcball = &props["arcball"]["properties"];
        assert!(arcball.get("radius").is_some());
        assert!(arcball.get("center").is_none());
    }
}
