//! Desktop wallpaper setting.
//!
//! Hands the generated image to the operating system through the `wallpaper`
//! crate, which covers Windows, macOS and the common Linux desktops.

use std::path::{Path, PathBuf};

/// Errors that can occur when setting the wallpaper.
#[derive(Debug)]
pub enum WallpaperError {
    /// The wallpaper file does not exist.
    FileNotFound(String),
    /// Failed to set the wallpaper.
    SetWallpaperFailed(String),
}

impl std::fmt::Display for WallpaperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "Wallpaper file not found: {path}"),
            Self::SetWallpaperFailed(msg) => write!(f, "Failed to set wallpaper: {msg}"),
        }
    }
}

impl std::error::Error for WallpaperError {}

/// Resolves `path` to the absolute form the OS call expects.
///
/// Relative paths are joined onto the working directory without resolving
/// links, so Windows paths keep their plain `C:\...` form.
///
/// # Errors
///
/// Returns `WallpaperError::FileNotFound` if the file does not exist.
pub fn desktop_path(path: &Path) -> Result<PathBuf, WallpaperError> {
    if !path.is_file() {
        return Err(WallpaperError::FileNotFound(path.display().to_string()));
    }

    std::path::absolute(path)
        .map_err(|_| WallpaperError::FileNotFound(path.display().to_string()))
}

/// Sets the desktop wallpaper on every screen.
///
/// # Arguments
///
/// * `path` - Path to the image file to set as wallpaper
///
/// # Errors
///
/// Returns an error if the file doesn't exist or the wallpaper setting fails.
pub fn set_wallpaper(path: &Path) -> Result<(), WallpaperError> {
    let absolute = desktop_path(path)?;
    let path_str = absolute.display().to_string();

    wallpaper::set_from_path(&path_str)
        .map_err(|e| WallpaperError::SetWallpaperFailed(e.to_string()))?;

    tracing::info!(path = %path_str, "desktop wallpaper updated");
    Ok(())
}
