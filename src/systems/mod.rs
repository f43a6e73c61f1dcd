//! Application systems
//!
//! Small systems driving the viewport without a window: scripted input and
//! frame output.

mod spin;
mod frame_writer;

pub use spin::SpinSystem;
pub use frame_writer::FrameWriter;
