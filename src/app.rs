//! Headless application
//!
//! Builds the hypercube, wires a viewport over it and renders the scripted
//! spin to numbered SVG frames.

use std::cell::RefCell;
use std::rc::Rc;

use hypersolid_core::Shape;
use hypersolid_render::Viewport;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::systems::{FrameWriter, SpinSystem};

/// Main application state
pub struct App {
    config: AppConfig,
    viewport: Viewport,
    spin: SpinSystem,
}

impl App {
    /// Build the shape, viewport and input script from configuration
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let shape = Rc::new(RefCell::new(Shape::tesseract(config.shape.size)));

        // Angles are only interesting when tracing a session
        shape.borrow_mut().on_rotate(|shape| {
            log::trace!("rotations: {:?}", shape.rotations());
        });

        let viewport = Viewport::new(
            shape,
            config.surface.width,
            config.surface.height,
            config.viewport.to_viewport_config(),
        )?;
        let spin = SpinSystem::from_config(&config.spin)?;

        log::info!(
            "Surface {}x{}, scale {}, {} frames",
            config.surface.width,
            config.surface.height,
            viewport.scale(),
            config.spin.frames
        );

        Ok(Self { config, viewport, spin })
    }

    /// Render the initial pose followed by every spin frame
    ///
    /// Returns the number of frames written.
    pub fn run(&mut self) -> Result<usize, AppError> {
        let mut writer = FrameWriter::create(&self.config.output.directory)?;

        writer.write(&self.viewport.render())?;
        for _ in 0..self.config.spin.frames {
            let frame = self.spin.step(&mut self.viewport);
            writer.write(&frame)?;
        }

        log::info!(
            "Wrote {} frames to {}",
            writer.written(),
            writer.directory().display()
        );
        Ok(writer.written())
    }

    /// The viewport being driven
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
