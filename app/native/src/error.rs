//! Error types for Kuralpaper.
//!
//! This module provides the unified error type returned by CLI commands.
//! Each component keeps its own error enum; they are folded into
//! [`KuralError`] at the command boundary.

use thiserror::Error;

use crate::config::ConfigError;
use crate::quotes::DataError;
use crate::wallpaper::{ComposeError, ManagerError, WallpaperError};

/// Errors that can occur during a kuralpaper run.
#[derive(Debug, Error)]
pub enum KuralError {
    /// The quotation data file is missing or malformed.
    #[error("Data error: {0}")]
    DataError(String),
    /// Rendering or writing the wallpaper image failed.
    #[error("Render error: {0}")]
    RenderError(String),
    /// Applying the desktop wallpaper failed.
    #[error("Wallpaper error: {0}")]
    WallpaperError(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for KuralError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for KuralError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<DataError> for KuralError {
    fn from(err: DataError) -> Self { Self::DataError(err.to_string()) }
}

impl From<ComposeError> for KuralError {
    fn from(err: ComposeError) -> Self { Self::RenderError(err.to_string()) }
}

impl From<WallpaperError> for KuralError {
    fn from(err: WallpaperError) -> Self { Self::WallpaperError(err.to_string()) }
}

impl From<ManagerError> for KuralError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Data(err) => err.into(),
            ManagerError::Compose(err) => err.into(),
            ManagerError::Desktop(err) => err.into(),
            err @ ManagerError::OutputDir { .. } => Self::IoError(err.to_string()),
        }
    }
}

impl From<ConfigError> for KuralError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_conversion() {
        let err: KuralError = DataError::EmptyCollection.into();
        assert!(matches!(err, KuralError::DataError(_)));
        let msg = err.to_string();
        assert!(msg.contains("Data error"));
        assert!(msg.contains("no quotations"));
    }

    #[test]
    fn test_compose_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: KuralError = ComposeError::Io {
            path: "/locked/out.png".to_string(),
            source: io_err,
        }
        .into();
        assert!(matches!(err, KuralError::RenderError(_)));
        assert!(err.to_string().contains("/locked/out.png"));
    }

    #[test]
    fn test_wallpaper_error_conversion() {
        let err: KuralError = WallpaperError::FileNotFound("missing.png".to_string()).into();
        assert!(matches!(err, KuralError::WallpaperError(_)));
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_manager_error_keeps_kind() {
        let err: KuralError = ManagerError::Data(DataError::NotFound("9999".to_string())).into();
        assert!(matches!(err, KuralError::DataError(_)));
        assert!(err.to_string().contains("9999"));

        let err: KuralError =
            ManagerError::Desktop(WallpaperError::SetWallpaperFailed("denied".to_string())).into();
        assert!(matches!(err, KuralError::WallpaperError(_)));
    }

    #[test]
    fn test_config_error_conversion() {
        let err: KuralError = ConfigError::NotFound.into();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KuralError = io_err.into();
        assert!(matches!(err, KuralError::IoError(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_serde_json_error_is_command_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: KuralError = json_err.into();
        assert!(matches!(err, KuralError::CommandError(_)));
    }
}
