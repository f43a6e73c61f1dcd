//! 4D Mathematics Library
//!
//! This crate provides 4D vector, rotation-plane, and polytope types for hypersolid.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`RotationPlane`] - One of the six coordinate planes of 4-space
//!
//! ## Shape Types
//!
//! - [`Polytope4D`] - Trait for 4D wireframe polytopes
//! - [`Edge`] - A pair of vertex indices
//! - [`Tesseract4D`] - A 4D hypercube

mod vec4;
mod plane;
pub mod shape;
pub mod tesseract;

pub use vec4::Vec4;
pub use plane::{RotationPlane, PlaneParseError};
pub use shape::{Edge, Polytope4D};
pub use tesseract::Tesseract4D;
