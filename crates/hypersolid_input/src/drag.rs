//! Pointer drag handling
//!
//! A drag rotates the shape in two planes at once: horizontal motion drives
//! one plane and vertical motion the other. Which pair is chosen depends on
//! the held modifiers:
//!
//! - no modifier: XZ / YZ (tumble through screen depth)
//! - Shift: XW / YW (turn through the fourth dimension)
//! - Shift + Alt or Shift + Ctrl: XY / ZW (spin on screen, roll through W)

use hypersolid_math::RotationPlane;
use crate::Modifiers;

/// The plane pair a drag rotates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Horizontal drives XZ, vertical drives YZ
    Tumble,
    /// Horizontal drives XW, vertical drives YW
    Hyper,
    /// Horizontal drives XY, vertical drives ZW
    Spin,
}

impl DragMode {
    /// Choose the mode for the held modifier keys
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.contains(Modifiers::SHIFT) {
            if modifiers.intersects(Modifiers::ALT | Modifiers::CTRL) {
                DragMode::Spin
            } else {
                DragMode::Hyper
            }
        } else {
            DragMode::Tumble
        }
    }

    /// `(horizontal, vertical)` planes for this mode
    pub fn planes(self) -> (RotationPlane, RotationPlane) {
        match self {
            DragMode::Tumble => (RotationPlane::XZ, RotationPlane::YZ),
            DragMode::Hyper => (RotationPlane::XW, RotationPlane::YW),
            DragMode::Spin => (RotationPlane::XY, RotationPlane::ZW),
        }
    }
}

/// Converts absolute pointer positions into drag deltas
///
/// Positions are surface-local pixels with y growing downward. They are
/// re-centred on the surface midpoint with y growing upward, and each sample
/// yields the motion since the previous one. The first sample only sets the
/// anchor and yields `(0, 0)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    last: Option<(f64, f64)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position on a `width` x `height` surface
    ///
    /// Returns the `(dx, dy)` motion since the previous sample.
    pub fn sample(&mut self, x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
        let current = (
            x - (width / 2) as f64,
            (height / 2) as f64 - y,
        );
        let (last_x, last_y) = self.last.unwrap_or(current);
        self.last = Some(current);
        (current.0 - last_x, current.1 - last_y)
    }

    /// Forget the anchor so the next sample yields no motion
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// True once a position has been recorded
    pub fn is_anchored(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_modifier_tumbles() {
        assert_eq!(DragMode::from_modifiers(Modifiers::empty()), DragMode::Tumble);
        // Alt or Ctrl alone does not change the mode
        assert_eq!(DragMode::from_modifiers(Modifiers::ALT), DragMode::Tumble);
        assert_eq!(DragMode::from_modifiers(Modifiers::CTRL), DragMode::Tumble);
    }

    #[test]
    fn test_shift_rotates_through_w() {
        let mode = DragMode::from_modifiers(Modifiers::SHIFT);
        assert_eq!(mode, DragMode::Hyper);
        assert_eq!(mode.planes(), (RotationPlane::XW, RotationPlane::YW));
    }

    #[test]
    fn test_shift_with_alt_or_ctrl_spins() {
        for mods in [
            Modifiers::SHIFT | Modifiers::ALT,
            Modifiers::SHIFT | Modifiers::CTRL,
            Modifiers::all(),
        ] {
            let mode = DragMode::from_modifiers(mods);
            assert_eq!(mode, DragMode::Spin, "{:?}", mods);
            assert_eq!(mode.planes(), (RotationPlane::XY, RotationPlane::ZW));
        }
    }

    #[test]
    fn test_tumble_planes() {
        assert_eq!(DragMode::Tumble.planes(), (RotationPlane::XZ, RotationPlane::YZ));
    }

    #[test]
    fn test_first_sample_anchors() {
        let mut tracker = PointerTracker::new();
        assert!(!tracker.is_anchored());
        assert_eq!(tracker.sample(150.0, 40.0, 200, 200), (0.0, 0.0));
        assert!(tracker.is_anchored());
    }

    #[test]
    fn test_motion_is_y_up() {
        let mut tracker = PointerTracker::new();
        tracker.sample(100.0, 100.0, 200, 200);
        // Right 10 px and up 5 px on screen
        assert_eq!(tracker.sample(110.0, 95.0, 200, 200), (10.0, 5.0));
        assert_eq!(tracker.sample(110.0, 105.0, 200, 200), (0.0, -10.0));
    }

    #[test]
    fn test_reset_drops_anchor() {
        let mut tracker = PointerTracker::new();
        tracker.sample(0.0, 0.0, 200, 200);
        tracker.reset();
        assert_eq!(tracker.sample(50.0, 50.0, 200, 200), (0.0, 0.0));
    }
}
