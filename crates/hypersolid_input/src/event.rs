//! Normalized input events

use winit::dpi::PhysicalSize;
use winit::event::MouseScrollDelta;
use crate::Modifiers;

/// Pixels of smooth scrolling treated as one wheel notch
pub const PIXELS_PER_LINE: f64 = 40.0;

/// An input event after normalization
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved by `(dx, dy)` pixels, y up, with modifiers held
    Drag {
        dx: f64,
        dy: f64,
        modifiers: Modifiers,
    },
    /// Wheel turned by `delta` notches, positive away from the user
    Wheel { delta: f64 },
    /// Drawing surface resized
    Resize { width: u32, height: u32 },
}

impl InputEvent {
    /// Drag event with no modifiers held
    pub fn drag(dx: f64, dy: f64) -> Self {
        InputEvent::Drag { dx, dy, modifiers: Modifiers::empty() }
    }

    /// Wheel event from a winit scroll delta
    pub fn scrolled(delta: &MouseScrollDelta) -> Self {
        InputEvent::Wheel { delta: wheel_delta(delta) }
    }

    /// Resize event from a winit surface size
    pub fn resized(size: PhysicalSize<u32>) -> Self {
        InputEvent::Resize { width: size.width, height: size.height }
    }
}

/// Vertical scroll amount in wheel notches
pub fn wheel_delta(delta: &MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
        MouseScrollDelta::PixelDelta(pos) => pos.y / PIXELS_PER_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_line_delta_passes_through() {
        let delta = MouseScrollDelta::LineDelta(0.0, -3.0);
        assert_eq!(wheel_delta(&delta), -3.0);
        assert_eq!(InputEvent::scrolled(&delta), InputEvent::Wheel { delta: -3.0 });
    }

    #[test]
    fn test_pixel_delta_scaled_to_lines() {
        let delta = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0));
        assert_eq!(wheel_delta(&delta), 2.0);
    }

    #[test]
    fn test_resized() {
        let event = InputEvent::resized(PhysicalSize::new(640, 480));
        assert_eq!(event, InputEvent::Resize { width: 640, height: 480 });
    }

    #[test]
    fn test_drag_has_no_modifiers() {
        match InputEvent::drag(1.0, 2.0) {
            InputEvent::Drag { dx, dy, modifiers } => {
                assert_eq!((dx, dy), (1.0, 2.0));
                assert!(modifiers.is_empty());
            }
            other => panic!("Expected Drag, got {:?}", other),
        }
    }
}
