//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hypersolid_render::ViewportConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Drawing surface size
    #[serde(default)]
    pub surface: SurfaceConfig,
    /// Zoom and stroke settings
    #[serde(default)]
    pub viewport: ViewportSettings,
    /// Hypercube geometry
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Scripted per-frame input
    #[serde(default)]
    pub spin: SpinConfig,
    /// Where frames are written
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HS_VIEWPORT__SCALE=3 -> viewport.scale = 3
        figment = figment.merge(Env::prefixed("HS_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Drawing surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Viewport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Starting zoom scale
    pub scale: f64,
    /// Starting stroke width in pixels
    pub line_width: f64,
    /// Closest zoom
    pub min_scale: f64,
    /// Farthest zoom
    pub max_scale: f64,
    /// Clamp edge colours into the displayable range
    pub clamp_brightness: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        let defaults = ViewportConfig::default();
        Self {
            scale: defaults.scale,
            line_width: defaults.line_width,
            min_scale: defaults.min_scale,
            max_scale: defaults.max_scale,
            clamp_brightness: defaults.clamp_brightness,
        }
    }
}

impl ViewportSettings {
    /// Convert to the render crate's viewport configuration
    pub fn to_viewport_config(&self) -> ViewportConfig {
        ViewportConfig::default()
            .with_scale(self.scale)
            .with_line_width(self.line_width)
            .with_scale_bounds(self.min_scale, self.max_scale)
            .with_clamp_brightness(self.clamp_brightness)
    }
}

/// Hypercube configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    /// Side length of the tesseract
    pub size: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

/// Scripted input applied once per frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Number of frames to render
    pub frames: u32,
    /// Horizontal drag per frame in pixels
    pub dx: f64,
    /// Vertical drag per frame in pixels (up is positive)
    pub dy: f64,
    /// Modifier keys held during the drag (`shift`, `alt`, `ctrl`)
    pub modifiers: Vec<String>,
    /// Wheel notches per frame
    pub wheel: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            frames: 60,
            dx: 4.0,
            dy: 2.0,
            modifiers: Vec::new(),
            wheel: 0.0,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `frame_NNNN.svg` files
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "frames".to_string(),
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
