//! SVG output for frames
//!
//! Each edge is stroked with its own user-space linear gradient running from
//! the first endpoint's colour to the second's.

use std::fmt;
use std::io;

use crate::Frame;

/// Display adapter rendering a [`Frame`] as a standalone SVG document
pub struct SvgDocument<'a>(pub &'a Frame);

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = frame.width,
            h = frame.height,
        )?;
        writeln!(f, r#"  <rect width="100%" height="100%" fill="black"/>"#)?;

        writeln!(f, "  <defs>")?;
        for (i, s) in frame.segments.iter().enumerate() {
            writeln!(
                f,
                r#"    <linearGradient id="edge{}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                i, s.start[0], s.start[1], s.end[0], s.end[1],
            )?;
            writeln!(f, r#"      <stop offset="0" stop-color="{}"/>"#, s.color_start)?;
            writeln!(f, r#"      <stop offset="1" stop-color="{}"/>"#, s.color_end)?;
            writeln!(f, "    </linearGradient>")?;
        }
        writeln!(f, "  </defs>")?;

        writeln!(
            f,
            r#"  <g fill="none" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round">"#,
            frame.line_width,
        )?;
        for (i, s) in frame.segments.iter().enumerate() {
            writeln!(
                f,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="url(#edge{})"/>"#,
                s.start[0], s.start[1], s.end[0], s.end[1], i,
            )?;
        }
        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}

/// Write `frame` as an SVG document
pub fn write_svg<W: io::Write>(frame: &Frame, mut out: W) -> io::Result<()> {
    write!(out, "{}", SvgDocument(frame))
}

impl Frame {
    /// Render this frame as an SVG document
    pub fn to_svg(&self) -> String {
        SvgDocument(self).to_string()
    }
}
