//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
///
/// The values shown are the defaults used when an option is omitted.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Kuralpaper Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Data
  // ============================================================================
  // Quotation data file: a JSON document with a top-level "features" array,
  // each entry holding a "properties" object.
  // Relative paths resolve against this file's directory; "~" is supported.
  // "dataPath": "thirukural.json",

  // ============================================================================
  // Output
  // ============================================================================
  // Directory for generated images (empty = current working directory).
  // Files are named wallpaper_YYYY-MM-DD.png.
  // "outputDir": "",
  //
  // Image size in pixels
  // "width": 1920,
  // "height": 1080,
  //
  // Set the generated image as desktop wallpaper when running "kuralpaper apply"
  // "applyWallpaper": true,

  // ============================================================================
  // Fonts
  // ============================================================================
  // Font files tried in order before the platform defaults.
  // The first one that loads is used; if none load, a built-in bitmap font
  // is used and Tamil text will not render.
  // "fonts": [
  //   "~/.local/share/fonts/NotoSansTamil-Regular.ttf"
  // ],

  // ============================================================================
  // Captions
  // ============================================================================
  // "headerLabel": "THIRUKKURAL",
  // "footerCaption": "~ THIRUVALLUVAR ~"
}
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
