//! Viewport configuration
//!
//! Zoom bounds, starting stroke width and the wheel/stroke constants live in
//! an explicit [`ViewportConfig`] handed to [`crate::Viewport::new`].

use std::fmt;

/// Projection and zoom parameters for a [`crate::Viewport`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    /// Starting zoom; larger values shrink the shape
    pub scale: f64,
    /// Starting stroke width in pixels
    pub line_width: f64,
    /// Smallest allowed scale (closest zoom)
    pub min_scale: f64,
    /// Largest allowed scale (farthest zoom)
    pub max_scale: f64,
    /// One wheel notch changes the scale by `1 / wheel_divisor`
    pub wheel_divisor: f64,
    /// After zooming the stroke width becomes `stroke_numerator / scale`
    pub stroke_numerator: f64,
    /// Clamp edge colour stops into `[0, 255]`
    pub clamp_brightness: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            line_width: 4.0,
            min_scale: 1.5,
            max_scale: 10.0,
            wheel_divisor: 10.0,
            stroke_numerator: 8.0,
            clamp_brightness: true,
        }
    }
}

impl ViewportConfig {
    /// Builder: set starting scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set starting stroke width
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Builder: set zoom bounds
    pub fn with_scale_bounds(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Builder: enable or disable colour clamping
    pub fn with_clamp_brightness(mut self, clamp: bool) -> Self {
        self.clamp_brightness = clamp;
        self
    }

    /// Check that the bounds are usable and the starting scale lies within them
    pub fn validate(&self) -> Result<(), ViewportError> {
        // Negated comparisons also reject NaN
        if !(self.min_scale > 0.0) || !(self.max_scale >= self.min_scale) || !self.max_scale.is_finite() {
            return Err(ViewportError::InvalidScaleBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.scale >= self.min_scale && self.scale <= self.max_scale) {
            return Err(ViewportError::ScaleOutOfBounds {
                scale: self.scale,
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.wheel_divisor > 0.0) {
            return Err(ViewportError::InvalidWheelDivisor(self.wheel_divisor));
        }
        if !(self.stroke_numerator > 0.0) || !self.stroke_numerator.is_finite() {
            return Err(ViewportError::InvalidStrokeNumerator(self.stroke_numerator));
        }
        if !(self.line_width >= 0.0) {
            return Err(ViewportError::InvalidLineWidth(self.line_width));
        }
        Ok(())
    }
}

/// Error building a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    /// `min_scale` is not positive or exceeds `max_scale`
    InvalidScaleBounds { min: f64, max: f64 },
    /// The starting scale lies outside `[min, max]`
    ScaleOutOfBounds { scale: f64, min: f64, max: f64 },
    /// The wheel divisor must be positive
    InvalidWheelDivisor(f64),
    /// The zoomed stroke numerator must be positive and finite
    InvalidStrokeNumerator(f64),
    /// The stroke width must not be negative
    InvalidLineWidth(f64),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::InvalidScaleBounds { min, max } => {
                write!(f, "Invalid scale bounds [{}, {}]", min, max)
            }
            ViewportError::ScaleOutOfBounds { scale, min, max } => {
                write!(f, "Scale {} outside bounds [{}, {}]", scale, min, max)
            }
            ViewportError::InvalidWheelDivisor(d) => {
                write!(f, "Wheel divisor must be positive, got {}", d)
            }
            ViewportError::InvalidStrokeNumerator(n) => {
                write!(f, "Stroke numerator must be positive and finite, got {}", n)
            }
            ViewportError::InvalidLineWidth(w) => {
                write!(f, "Line width must not be negative, got {}", w)
            }
        }
    }
}

impl std::error::Error for ViewportError {}
