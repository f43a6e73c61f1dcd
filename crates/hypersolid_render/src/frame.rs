//! Render output types
//!
//! A [`Frame`] is everything a drawing layer needs for one redraw: one
//! [`Segment`] per edge, the stroke width and the surface size. Nothing in
//! this crate touches pixels.

use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A green-channel colour stop at one end of an edge
///
/// The channel encodes the vertex's position along the fourth axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorStop {
    /// Green channel, nominally `[0, 255]`
    pub green: i32,
}

impl ColorStop {
    /// Build a stop, optionally clamping into the displayable range
    pub fn new(green: i32, clamp: bool) -> Self {
        let green = if clamp { green.clamp(0, 255) } else { green };
        Self { green }
    }

    /// Normalized RGBA for GPU upload (always clamped)
    pub fn rgba(&self) -> [f32; 4] {
        [0.0, self.green.clamp(0, 255) as f32 / 255.0, 0.0, 1.0]
    }
}

impl fmt::Display for ColorStop {
    /// CSS colour string, `rgba(0, g, 0, 1)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba(0, {}, 0, 1)", self.green)
    }
}

/// One edge in screen space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Screen position of the first endpoint
    pub start: [f64; 2],
    /// Screen position of the second endpoint
    pub end: [f64; 2],
    /// Colour at the first endpoint
    pub color_start: ColorStop,
    /// Colour at the second endpoint
    pub color_end: ColorStop,
    /// Depth factor of each endpoint (`0.6 + 0.4 * z / scale`)
    pub depth: [f64; 2],
}

/// A vertex for an external GPU line pipeline
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in normalized device coordinates
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

/// A complete render of the shape
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// One segment per edge, in edge order
    pub segments: Vec<Segment>,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Frame {
    /// Two vertices per segment, in normalized device coordinates
    ///
    /// A zero-sized surface maps everything to the origin.
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        let to_ndc = |p: [f64; 2]| -> [f32; 2] {
            if self.width == 0 || self.height == 0 {
                return [0.0, 0.0];
            }
            [
                (p[0] / f64::from(self.width) * 2.0 - 1.0) as f32,
                (1.0 - p[1] / f64::from(self.height) * 2.0) as f32,
            ]
        };

        let mut vertices = Vec::with_capacity(self.segments.len() * 2);
        for segment in &self.segments {
            vertices.push(LineVertex {
                position: to_ndc(segment.start),
                color: segment.color_start.rgba(),
            });
            vertices.push(LineVertex {
                position: to_ndc(segment.end),
                color: segment.color_end.rgba(),
            });
        }
        vertices
    }

    /// Number of segments
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
