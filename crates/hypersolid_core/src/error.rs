//! Shape error types
//!
//! Construction-time validation and plane-name parsing are the only ways a
//! shape operation can fail.

use std::fmt;

use hypersolid_math::PlaneParseError;

/// Error type for shape operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// An edge refers to a vertex that does not exist
    EdgeOutOfRange {
        /// Position of the offending edge in the edge list
        edge: usize,
        /// The invalid vertex index
        index: usize,
        /// Number of vertices in the shape
        vertex_count: usize,
    },
    /// A rotation was requested about an unknown plane
    UnknownPlane(PlaneParseError),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::EdgeOutOfRange { edge, index, vertex_count } => write!(
                f,
                "Edge {} refers to vertex {} but the shape has {} vertices",
                edge, index, vertex_count
            ),
            ShapeError::UnknownPlane(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::EdgeOutOfRange { .. } => None,
            ShapeError::UnknownPlane(err) => Some(err),
        }
    }
}

impl From<PlaneParseError> for ShapeError {
    fn from(err: PlaneParseError) -> Self {
        ShapeError::UnknownPlane(err)
    }
}
