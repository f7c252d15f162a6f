//! Presentation: interpolation math and the ratatui renderer.

pub mod interpolate;
pub mod renderer;

pub use interpolate::{interpolate, SegmentPos};
pub use renderer::Renderer;
