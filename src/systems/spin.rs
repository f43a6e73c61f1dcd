//! Scripted input system
//!
//! Replays the same drag and wheel input every frame, standing in for a user
//! dragging across the surface.

use hypersolid_render::{Frame, InputEvent, Modifiers, Viewport};
use crate::config::SpinConfig;
use crate::error::AppError;

/// Produces one frame's worth of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinSystem {
    dx: f64,
    dy: f64,
    modifiers: Modifiers,
    wheel: f64,
}

impl SpinSystem {
    /// Build from config, rejecting unknown modifier names
    pub fn from_config(config: &SpinConfig) -> Result<Self, AppError> {
        let mut modifiers = Modifiers::empty();
        for name in &config.modifiers {
            let flag = Modifiers::parse_key(name)
                .ok_or_else(|| AppError::UnknownModifier(name.clone()))?;
            modifiers |= flag;
        }

        Ok(Self {
            dx: config.dx,
            dy: config.dy,
            modifiers,
            wheel: config.wheel,
        })
    }

    /// Events to apply for one frame
    pub fn events(&self) -> Vec<InputEvent> {
        let mut events = Vec::with_capacity(2);
        if self.wheel != 0.0 {
            events.push(InputEvent::Wheel { delta: self.wheel });
        }
        if self.dx != 0.0 || self.dy != 0.0 {
            events.push(InputEvent::Drag {
                dx: self.dx,
                dy: self.dy,
                modifiers: self.modifiers,
            });
        }
        events
    }

    /// Apply one frame of input and return the resulting frame
    pub fn step(&self, viewport: &mut Viewport) -> Frame {
        let mut frame = None;
        for event in self.events() {
            frame = Some(viewport.handle(&event));
        }
        frame.unwrap_or_else(|| viewport.render())
    }

    /// Modifiers held during each drag
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}
