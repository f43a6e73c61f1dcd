//! Projection of a rotated 4D shape onto a 2D surface
//!
//! The [`Viewport`] shares its [`Shape`] with the rest of the application.
//! It maps drags to plane rotations, wheel turns to zoom and resizes to a new
//! projection bound, and turns the shape's rotated vertices into a [`Frame`].

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use hypersolid_core::{Shape, Vec4};
use hypersolid_input::{DragMode, InputEvent, Modifiers};
use crate::{ColorStop, Frame, Segment, ViewportConfig, ViewportError};

/// A shape vertex after projection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedVertex {
    /// Screen x, on a pixel centre
    pub x: f64,
    /// Screen y (down), on a pixel centre
    pub y: f64,
    /// Depth factor `0.6 + 0.4 * z / scale`
    pub depth: f64,
    /// Unclamped green channel derived from w
    pub brightness: i32,
}

/// Projects a shared [`Shape`] onto a drawing surface
pub struct Viewport {
    shape: Rc<RefCell<Shape>>,
    config: ViewportConfig,
    scale: f64,
    line_width: f64,
    width: u32,
    height: u32,
    /// Half the smaller surface dimension
    bound: f64,
}

impl Viewport {
    /// Create a viewport for a `width` x `height` surface
    pub fn new(
        shape: Rc<RefCell<Shape>>,
        width: u32,
        height: u32,
        config: ViewportConfig,
    ) -> Result<Self, ViewportError> {
        config.validate()?;

        Ok(Self {
            shape,
            scale: config.scale,
            line_width: config.line_width,
            width,
            height,
            bound: Self::bound_for(width, height),
            config,
        })
    }

    fn bound_for(width: u32, height: u32) -> f64 {
        f64::from(width.min(height)) / 2.0
    }

    /// Project a single rotated vertex
    pub fn project(&self, v: &Vec4) -> ProjectedVertex {
        let z_ratio = v.z / self.scale;
        let perspective = (0.90 + z_ratio * 0.30) * self.bound;
        let half_width = f64::from(self.width) / 2.0;
        let half_height = f64::from(self.height) / 2.0;

        ProjectedVertex {
            // +0.5 puts 1px strokes on pixel centres
            x: (half_width + perspective * (v.x / self.scale)).floor() + 0.5,
            y: (half_height - perspective * (v.y / self.scale)).floor() + 0.5,
            depth: 0.60 + 0.40 * z_ratio,
            brightness: 96 + (96.0 * v.w / self.scale).floor() as i32,
        }
    }

    /// Render the shared shape
    ///
    /// Borrows the shape, so this must not be called from inside one of the
    /// shape's own observers; use [`Viewport::render_shape`] with the
    /// borrowed shape there instead.
    pub fn render(&self) -> Frame {
        let shape = self.shape.borrow();
        self.render_shape(&shape)
    }

    /// Render `shape` with this viewport's scale and bounds
    pub fn render_shape(&self, shape: &Shape) -> Frame {
        let projected: Vec<ProjectedVertex> =
            shape.vertices().iter().map(|v| self.project(v)).collect();

        let clamp = self.config.clamp_brightness;
        let segments = shape
            .edges()
            .iter()
            .map(|edge| {
                let a = &projected[edge.a()];
                let b = &projected[edge.b()];
                Segment {
                    start: [a.x, a.y],
                    end: [b.x, b.y],
                    color_start: ColorStop::new(a.brightness, clamp),
                    color_end: ColorStop::new(b.brightness, clamp),
                    depth: [a.depth, b.depth],
                }
            })
            .collect();

        Frame {
            segments,
            line_width: self.line_width,
            width: self.width,
            height: self.height,
        }
    }

    /// Rotate the shape by a pointer drag of `(dx, dy)` pixels (y up)
    ///
    /// A drag across the full bound turns the shape by π. On a zero-sized
    /// surface there is no bound to measure against and the drag is ignored,
    /// as is a drag with a non-finite component.
    pub fn drag(&mut self, dx: f64, dy: f64, modifiers: Modifiers) -> Frame {
        if !(dx.is_finite() && dy.is_finite()) {
            log::debug!("Ignoring non-finite drag ({}, {})", dx, dy);
        } else if self.bound > 0.0 {
            let (horizontal, vertical) = DragMode::from_modifiers(modifiers).planes();
            let mut shape = self.shape.borrow_mut();
            shape.rotate(horizontal, PI * dx / self.bound);
            shape.rotate(vertical, PI * dy / self.bound);
        } else {
            log::debug!("Ignoring drag on zero-sized surface");
        }
        self.render()
    }

    /// Zoom by `delta` wheel notches
    ///
    /// The scale moves by `delta / wheel_divisor`, clamped to the configured
    /// bounds, and the stroke width becomes `stroke_numerator / scale`.
    pub fn wheel(&mut self, delta: f64) -> Frame {
        if delta.is_finite() {
            self.scale = (self.scale + delta / self.config.wheel_divisor)
                .clamp(self.config.min_scale, self.config.max_scale);
            self.line_width = self.config.stroke_numerator / self.scale;
            log::debug!("Zoom scale {:.2}, line width {:.2}", self.scale, self.line_width);
        }
        self.render()
    }

    /// Adopt a new surface size
    pub fn resize(&mut self, width: u32, height: u32) -> Frame {
        self.width = width;
        self.height = height;
        self.bound = Self::bound_for(width, height);
        log::debug!("Resized to {}x{} (bound {})", width, height, self.bound);
        self.render()
    }

    /// Apply a normalized input event and re-render
    pub fn handle(&mut self, event: &InputEvent) -> Frame {
        match *event {
            InputEvent::Drag { dx, dy, modifiers } => self.drag(dx, dy, modifiers),
            InputEvent::Wheel { delta } => self.wheel(delta),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// The shared shape
    pub fn shape(&self) -> &Rc<RefCell<Shape>> {
        &self.shape
    }

    /// The configuration this viewport was built with
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Current zoom scale
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current stroke width
    #[inline]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Half the smaller surface dimension
    #[inline]
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Surface width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}
