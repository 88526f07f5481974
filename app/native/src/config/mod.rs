//! Configuration module for Kuralpaper.
//!
//! This module provides the configuration types and the process-wide
//! configuration instance used by CLI commands.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use types::{
    ConfigError, DEFAULT_DATA_FILE, DEFAULT_FOOTER_CAPTION, DEFAULT_HEADER_LABEL, DEFAULT_HEIGHT,
    DEFAULT_WIDTH, KuralConfig, config_paths, load_config as load_config_default,
    load_config_from_path,
};

/// Global configuration instance, loaded once per process.
static CONFIG: OnceLock<KuralConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Loads `path` as the process configuration instead of searching the
/// default locations.
///
/// Must be called before `get_config()` to take effect. Later calls return
/// the instance already loaded.
///
/// # Errors
///
/// Returns `ConfigError` if the file is missing, unreadable or malformed.
pub fn load_custom_config(path: &Path) -> Result<&'static KuralConfig, ConfigError> {
    let (config, loaded_from) = load_config_from_path(path)?;
    tracing::debug!(path = %loaded_from.display(), "loaded configuration");

    let _ = CONFIG_PATH.set(loaded_from);
    Ok(CONFIG.get_or_init(|| config))
}

/// Loads the configuration from the default search paths, falling back to
/// defaults.
///
/// A missing file is normal (every option has a default); an unreadable or
/// malformed file is logged and ignored.
fn load_or_default() -> KuralConfig {
    match load_config_default() {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            KuralConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            KuralConfig::default()
        }
    }
}

/// Returns the global configuration instance, initializing it if necessary.
pub fn get_config() -> &'static KuralConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }

/// Returns the directory that relative paths in the configuration resolve against.
///
/// This is the directory of the loaded configuration file, or the working
/// directory when no file was loaded.
#[must_use]
pub fn base_dir() -> PathBuf {
    get_config_path()
        .and_then(|path| path.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
