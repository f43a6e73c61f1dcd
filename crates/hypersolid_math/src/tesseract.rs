//! Tesseract (4D Hypercube) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes).
//!
//! For wireframe rendering only the vertices and edges are needed.

use crate::{Vec4, shape::{Edge, Polytope4D}};

/// A tesseract (4D hypercube) - pure geometry without colors
#[derive(Clone, Debug)]
pub struct Tesseract4D {
    /// Half the side length
    half_size: f64,
    /// The 16 vertices of the tesseract
    vertices: [Vec4; 16],
    /// The 32 edges
    edges: Vec<Edge>,
}

impl Tesseract4D {
    /// Create a new tesseract centered at origin with given size
    ///
    /// # Arguments
    /// * `size` - The full side length of the tesseract
    pub fn new(size: f64) -> Self {
        let h = size * 0.5;

        // Vertex i takes +h on axis k when bit k of i is set:
        // bit 0 = x, bit 1 = y, bit 2 = z, bit 3 = w
        let vertices = std::array::from_fn(|i| {
            let coord = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
            Vec4::new(coord(0), coord(1), coord(2), coord(3))
        });

        Self {
            half_size: h,
            vertices,
            edges: Self::compute_edges(),
        }
    }

    /// The hypercube with coordinates ±1
    pub fn unit() -> Self {
        Self::new(2.0)
    }

    /// Get the half-size (half the side length)
    #[inline]
    pub fn half_size(&self) -> f64 {
        self.half_size
    }

    /// Get the full size (side length)
    #[inline]
    pub fn size(&self) -> f64 {
        self.half_size * 2.0
    }

    /// Two vertices share an edge when their indices differ in exactly one bit
    fn compute_edges() -> Vec<Edge> {
        let mut edges = Vec::with_capacity(32);
        for i in 0usize..16 {
            for bit in 0..4 {
                let j = i | (1 << bit);
                if j != i {
                    edges.push(Edge::new(i, j));
                }
            }
        }
        edges
    }

    /// Split into owned vertex and edge lists
    pub fn into_parts(self) -> (Vec<Vec4>, Vec<Edge>) {
        (self.vertices.to_vec(), self.edges)
    }
}

impl Polytope4D for Tesseract4D {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
