//! PNG output.
//!
//! The image is encoded into a temporary file next to the destination and
//! renamed over it, so the destination is either fully written or untouched.

use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use image::codecs::png::PngEncoder;
use tempfile::NamedTempFile;

/// Errors that can occur while saving a composed wallpaper.
#[derive(Debug)]
pub enum ComposeError {
    /// Creating, writing or renaming the output file failed.
    Io { path: String, source: std::io::Error },
    /// PNG encoding failed.
    Encode { path: String, reason: String },
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to write wallpaper {path}: {source}"),
            Self::Encode { path, reason } => {
                write!(f, "Failed to encode wallpaper {path}: {reason}")
            }
        }
    }
}

impl std::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { .. } => None,
        }
    }
}

/// Writes `canvas` to `path` as a PNG, replacing any existing file.
///
/// # Errors
///
/// Returns `ComposeError::Io` if the temporary file cannot be created, written
/// or moved into place, and `ComposeError::Encode` if encoding fails.
pub fn write_png(canvas: &RgbImage, path: &Path) -> Result<(), ComposeError> {
    let io_error = |source: std::io::Error| ComposeError::Io {
        path: path.display().to_string(),
        source,
    };

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        canvas.write_with_encoder(PngEncoder::new(&mut writer)).map_err(|err| {
            ComposeError::Encode {
                path: path.display().to_string(),
                reason: err.to_string(),
            }
        })?;
        writer.flush().map_err(io_error)?;
    }

    temp.persist(path).map_err(|err| io_error(err.error))?;

    tracing::debug!(path = %path.display(), "wrote wallpaper image");

    Ok(())
}
