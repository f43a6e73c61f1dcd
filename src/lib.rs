//! Hypersolid - interactive 4D hypercube renderer
//!
//! Library side of the `hypersolid` binary: configuration, the headless
//! application and its systems.

pub mod app;
pub mod config;
pub mod error;
pub mod systems;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
