//! 4D Rendering Library
//!
//! This crate projects a rotated 4D shape onto a 2D surface. It produces
//! geometry only; actual drawing belongs to the caller.
//!
//! ## Key Components
//!
//! - [`Viewport`] - Zoom, surface bounds and input mapping over a shared shape
//! - [`ViewportConfig`] - Starting zoom, stroke width and zoom bounds
//! - [`Frame`] / [`Segment`] / [`ColorStop`] - Render output, one segment per edge
//! - [`LineVertex`] - GPU-ready line vertices
//! - [`svg`] - SVG serialization of a frame

pub mod config;
pub mod frame;
pub mod svg;
pub mod viewport;

pub use config::{ViewportConfig, ViewportError};
pub use frame::{ColorStop, Frame, LineVertex, Segment};
pub use svg::{write_svg, SvgDocument};
pub use viewport::{ProjectedVertex, Viewport};

// Re-export core types for convenience
pub use hypersolid_core::{Shape, ShapeEvent, RotationState, Vec4, RotationPlane, Edge, Tesseract4D};
pub use hypersolid_input::{InputEvent, Modifiers, DragMode};
