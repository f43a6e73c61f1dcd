//! Core types for hypersolid
//!
//! This crate provides the rotatable 4D shape at the heart of the renderer:
//!
//! - [`Shape`] - Reference vertices, edges and cumulative rotation with change observers
//! - [`RotationState`] - The six cumulative plane angles
//! - [`ShapeEvent`] - Events observers can subscribe to
//! - [`ShapeError`] - Construction and plane-name errors

mod error;
mod rotation;
mod shape;

pub use error::ShapeError;
pub use rotation::RotationState;
pub use shape::{Shape, ShapeEvent, ShapeObserver, ObserverId};

// Re-export commonly used types from hypersolid_math for convenience
pub use hypersolid_math::{Vec4, RotationPlane, Edge, Polytope4D, Tesseract4D};
