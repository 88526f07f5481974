//! Configuration types for Kuralpaper.
//!
//! This module provides the configuration types and loading functionality.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::platform::path::expand_and_resolve;

/// Default name of the quotation data file.
pub const DEFAULT_DATA_FILE: &str = "thirukural.json";

/// Default label printed before the quotation number in the header.
pub const DEFAULT_HEADER_LABEL: &str = "THIRUKKURAL";

/// Default attribution caption printed in the footer.
pub const DEFAULT_FOOTER_CAPTION: &str = "~ THIRUVALLUVAR ~";

/// Default wallpaper width in pixels.
pub const DEFAULT_WIDTH: u32 = 1920;

/// Default wallpaper height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1080;

/// Root configuration for Kuralpaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct KuralConfig {
    /// Path to the quotation data file (JSON with a top-level `features` array).
    ///
    /// Relative paths are resolved against the directory of the configuration
    /// file; `~` expands to the home directory.
    pub data_path: String,

    /// Directory where generated wallpapers are written.
    /// Empty means the current working directory.
    pub output_dir: String,

    /// Wallpaper width in pixels.
    pub width: u32,

    /// Wallpaper height in pixels.
    pub height: u32,

    /// Font files to try, in order, before the platform defaults.
    /// The first one that loads is used for every text block.
    pub fonts: Vec<String>,

    /// Label printed before the quotation number in the header line.
    pub header_label: String,

    /// Attribution caption printed in the footer.
    pub footer_caption: String,

    /// Whether `kuralpaper apply` sets the desktop wallpaper after rendering.
    pub apply_wallpaper: bool,
}

impl Default for KuralConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_FILE.to_string(),
            output_dir: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fonts: Vec::new(),
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            footer_caption: DEFAULT_FOOTER_CAPTION.to_string(),
            apply_wallpaper: true,
        }
    }
}

impl KuralConfig {
    /// Returns the data file path, resolved against `base_dir`.
    #[must_use]
    pub fn data_path_in(&self, base_dir: &Path) -> PathBuf {
        expand_and_resolve(&self.data_path, base_dir)
    }

    /// Returns the output directory, resolved against `base_dir`.
    ///
    /// An empty `output_dir` resolves to an empty path, meaning the working
    /// directory.
    #[must_use]
    pub fn output_dir_in(&self, base_dir: &Path) -> PathBuf {
        expand_and_resolve(&self.output_dir, base_dir)
    }

    /// Returns the configured font candidates, resolved against `base_dir`.
    #[must_use]
    pub fn font_paths_in(&self, base_dir: &Path) -> Vec<PathBuf> {
        self.fonts
            .iter()
            .map(|font| expand_and_resolve(font, base_dir))
            .filter(|path| !path.as_os_str().is_empty())
            .collect()
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at ~/.config/kuralpaper/config.jsonc \
                or ~/.kuralpaper.jsonc"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in the home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".kuralpaper.jsonc", ".kuralpaper.json"];

/// Application directory name under the config roots.
const APP_DIR: &str = "kuralpaper";

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/kuralpaper/config.jsonc` or `config.json` (if set)
/// 2. `~/.config/kuralpaper/config.jsonc` or `config.json`
/// 3. The platform config directory (`dirs::config_dir`), e.g.
///    `%APPDATA%\kuralpaper\` on Windows
/// 4. `~/.kuralpaper.jsonc` or `~/.kuralpaper.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let app_dir = PathBuf::from(xdg_config).join(APP_DIR);
        for filename in CONFIG_FILE_NAMES {
            paths.push(app_dir.join(filename));
        }
    }

    if let Some(home) = dirs::home_dir() {
        let app_dir = home.join(".config").join(APP_DIR);
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let app_dir = config_dir.join(APP_DIR);
        for filename in CONFIG_FILE_NAMES {
            let path = app_dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// Comments are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read and
/// `ConfigError::ParseError` if it is not valid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(KuralConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: KuralConfig = serde_json::from_reader(reader)?;

    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`] for the
/// first file that exists.
pub fn load_config() -> Result<(KuralConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
