//! Polytope traits and primitives for 4D geometry
//!
//! Polytopes are pure geometric data - no colors, rotation state or
//! rendering info. Rotation lives in `hypersolid_core::Shape`.

use crate::Vec4;

/// An edge of a polytope, defined by two vertex indices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Indices into the parent polytope's vertex array
    pub indices: [usize; 2],
}

impl Edge {
    /// Create a new edge between vertices `a` and `b`
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { indices: [a, b] }
    }

    /// First endpoint
    #[inline]
    pub const fn a(&self) -> usize {
        self.indices[0]
    }

    /// Second endpoint
    #[inline]
    pub const fn b(&self) -> usize {
        self.indices[1]
    }

    /// Get the indices with the smaller one first
    pub fn canonical(&self) -> [usize; 2] {
        let [a, b] = self.indices;
        if a <= b { [a, b] } else { [b, a] }
    }
}

impl From<[usize; 2]> for Edge {
    #[inline]
    fn from(indices: [usize; 2]) -> Self {
        Self { indices }
    }
}

/// Trait for 4D polytopes rendered as wireframes
///
/// A Polytope4D provides:
/// - Vertices: The 4D points that define the shape
/// - Edges: Pairs of vertex indices joined by a line
pub trait Polytope4D {
    /// Get the vertices of this polytope
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this polytope
    fn edges(&self) -> &[Edge];

    /// Get the number of vertices
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Get the number of edges
    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
