//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcview crate.
#[derive(Debug)]
pub enum ArcviewError {
    /// A projection was requested for a surface with zero width or height.
    DegenerateViewport {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option value outside its valid range.
    InvalidOption {
        /// Dotted path of the option, e.g. `input.wheel_step`.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for ArcviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateViewport { width, height } => {
                write!(f, "degenerate viewport: {width}x{height} pixels")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption { name, value } => {
                write!(f, "invalid option {name} = {value}")
            }
        }
    }
}

impl std::error::Error for ArcviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArcviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
