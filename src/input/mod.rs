//! Input handling: pointer event types and the router that converts raw
//! window events into camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputRouter, Viewport};
