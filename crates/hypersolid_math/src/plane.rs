//! Rotation planes in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Plane rotations do not commute, so composing all six requires a fixed
//! order. [`RotationPlane::APPLICATION_ORDER`] is that order.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationPlane {
    /// XY plane - spins the shape on screen
    XY,
    /// XZ plane - tumbles left/right through screen depth
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane - tumbles up/down through screen depth
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All planes in slot order (see [`RotationPlane::index`])
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Order in which cumulative rotations are composed onto a vertex
    pub const APPLICATION_ORDER: [RotationPlane; 6] = [
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
        RotationPlane::XY,
        RotationPlane::XZ,
    ];

    /// Stable slot in `0..6`, usable as an array index
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }

    /// Lowercase two-letter name
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "xy",
            RotationPlane::XZ => "xz",
            RotationPlane::XW => "xw",
            RotationPlane::YZ => "yz",
            RotationPlane::YW => "yw",
            RotationPlane::ZW => "zw",
        }
    }

    /// Rotate `v` within this plane given the sine and cosine of the angle
    ///
    /// The two coordinates outside the plane are left untouched. The YW and
    /// ZW planes rotate with the opposite handedness to the other four.
    #[inline]
    pub fn rotate(self, v: Vec4, sin: f64, cos: f64) -> Vec4 {
        let (s, c) = (sin, cos);
        let Vec4 { x, y, z, w } = v;
        match self {
            RotationPlane::XY => Vec4::new(c * x + s * y, -s * x + c * y, z, w),
            RotationPlane::XZ => Vec4::new(c * x + s * z, y, -s * x + c * z, w),
            RotationPlane::XW => Vec4::new(c * x + s * w, y, z, -s * x + c * w),
            RotationPlane::YZ => Vec4::new(x, c * y + s * z, -s * y + c * z, w),
            RotationPlane::YW => Vec4::new(x, c * y - s * w, z, s * y + c * w),
            RotationPlane::ZW => Vec4::new(x, y, c * z - s * w, s * z + c * w),
        }
    }

    /// Rotate `v` within this plane by `angle` radians
    #[inline]
    pub fn rotate_by(self, v: Vec4, angle: f64) -> Vec4 {
        let (s, c) = angle.sin_cos();
        self.rotate(v, s, c)
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotationPlane {
    type Err = PlaneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(RotationPlane::XY),
            "xz" => Ok(RotationPlane::XZ),
            "xw" => Ok(RotationPlane::XW),
            "yz" => Ok(RotationPlane::YZ),
            "yw" => Ok(RotationPlane::YW),
            "zw" => Ok(RotationPlane::ZW),
            _ => Err(PlaneParseError { name: s.to_string() }),
        }
    }
}

/// Error returned when a string does not name one of the six planes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneParseError {
    /// The rejected input
    pub name: String,
}

impl fmt::Display for PlaneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown rotation plane '{}' (expected one of xy, xz, xw, yz, yw, zw)",
            self.name
        )
    }
}

impl std::error::Error for PlaneParseError {}
