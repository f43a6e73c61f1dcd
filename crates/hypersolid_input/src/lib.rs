//! 4D Input Handling
//!
//! This crate turns raw pointer, wheel and resize input into the normalized
//! events the viewport consumes:
//!
//! - [`Modifiers`] - Held modifier keys
//! - [`DragMode`] - Which pair of rotation planes a drag drives
//! - [`PointerTracker`] - Absolute pointer positions to centred, y-up drag deltas
//! - [`InputEvent`] - Normalized drag / wheel / resize event

mod modifiers;
mod drag;
mod event;

pub use modifiers::Modifiers;
pub use drag::{DragMode, PointerTracker};
pub use event::{InputEvent, wheel_delta, PIXELS_PER_LINE};
