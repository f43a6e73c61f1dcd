//! Application error type

use std::fmt;
use std::io;

use hypersolid_render::ViewportError;
use crate::config::ConfigError;

/// Anything that can stop the renderer
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Viewport settings were rejected
    Viewport(ViewportError),
    /// A spin modifier name was not recognised
    UnknownModifier(String),
    /// Writing frames failed
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "{}", err),
            AppError::Viewport(err) => write!(f, "Viewport error: {}", err),
            AppError::UnknownModifier(name) => {
                write!(f, "Unknown modifier '{}' (expected shift, alt or ctrl)", name)
            }
            AppError::Io(err) => write!(f, "Output error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Viewport(err) => Some(err),
            AppError::UnknownModifier(_) => None,
            AppError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<ViewportError> for AppError {
    fn from(err: ViewportError) -> Self {
        AppError::Viewport(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_modifier_display() {
        let err = AppError::UnknownModifier("meta".to_string());
        assert!(err.to_string().contains("meta"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let err: AppError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_viewport_error() {
        let err: AppError = ViewportError::InvalidWheelDivisor(0.0).into();
        assert!(err.to_string().starts_with("Viewport error"));
    }
}
