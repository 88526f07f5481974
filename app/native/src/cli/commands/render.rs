//! Arguments shared by the commands that select and render a quotation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::KuralConfig;
use crate::error::KuralError;
use crate::platform::path::expand;
use crate::wallpaper::{ComposeOptions, Selection, WallpaperRequest};

/// Which quotation to use and where to read it from.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectArgs {
    /// Quotation data file (overrides `dataPath`).
    #[arg(long, short, value_name = "PATH")]
    pub data: Option<String>,

    /// Seed for the random pick, for repeatable output.
    #[arg(long, value_name = "SEED", conflicts_with = "kural")]
    pub seed: Option<u64>,

    /// Use the quotation with this number instead of a random one.
    #[arg(long, short, value_name = "NUMBER")]
    pub kural: Option<String>,
}

impl SelectArgs {
    /// Selection strategy described by the flags.
    #[must_use]
    pub fn selection(&self) -> Selection {
        match (&self.kural, self.seed) {
            (Some(number), _) => Selection::Number(number.clone()),
            (None, Some(seed)) => Selection::Seeded(seed),
            (None, None) => Selection::Random,
        }
    }
}

/// Selection plus output and rendering overrides.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Output PNG file (default: wallpaper_YYYY-MM-DD.png in `outputDir`).
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<String>,

    /// Image width in pixels (overrides `width`).
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Image height in pixels (overrides `height`).
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Font file to try first. Can be repeated.
    #[arg(long = "font", short, value_name = "PATH")]
    pub fonts: Vec<String>,
}

/// Builds a run request from configuration values and command-line overrides.
///
/// Paths given on the command line are relative to the working directory;
/// paths from the configuration are relative to `base_dir`.
///
/// # Errors
///
/// Returns `KuralError::ConfigError` if the effective image size is zero.
pub fn build_request(
    config: &KuralConfig,
    base_dir: &Path,
    args: &RenderArgs,
) -> Result<WallpaperRequest, KuralError> {
    let mut options = ComposeOptions::from(config);
    options.width = args.width.unwrap_or(options.width);
    options.height = args.height.unwrap_or(options.height);

    if options.width == 0 || options.height == 0 {
        return Err(KuralError::ConfigError(format!(
            "Image size must be positive, got {}x{}",
            options.width, options.height
        )));
    }

    let fonts: Vec<PathBuf> = args
        .fonts
        .iter()
        .map(|font| expand(font))
        .filter(|path| !path.as_os_str().is_empty())
        .chain(config.font_paths_in(base_dir))
        .collect();

    Ok(WallpaperRequest {
        data_path: select_data_path(config, base_dir, &args.select),
        output_path: args.output.as_deref().map(expand).filter(|p| !p.as_os_str().is_empty()),
        output_dir: config.output_dir_in(base_dir),
        fonts,
        options,
        selection: args.select.selection(),
    })
}

/// Data file from the flag, or from the configuration.
#[must_use]
pub fn select_data_path(config: &KuralConfig, base_dir: &Path, args: &SelectArgs) -> PathBuf {
    args.data
        .as_deref()
        .map(expand)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| config.data_path_in(base_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PathBuf { PathBuf::from("/home/valluvar/.config/kuralpaper") }

    #[test]
    fn test_build_request_uses_config_defaults() {
        let config = KuralConfig::default();
        let request = build_request(&config, &base(), &RenderArgs::default()).unwrap();

        assert_eq!(request.data_path, base().join("thirukural.json"));
        assert!(request.output_path.is_none());
        assert_eq!(request.output_dir, PathBuf::new());
        assert!(request.fonts.is_empty());
        assert_eq!(request.options, ComposeOptions::default());
        assert_eq!(request.selection, Selection::Random);
    }

    #[test]
    fn test_build_request_flags_override_config() {
        let config = KuralConfig {
            fonts: vec!["fonts/Latha.ttf".to_string()],
            output_dir: "~/Pictures/kural".to_string(),
            ..Default::default()
        };
        let args = RenderArgs {
            select: SelectArgs {
                data: Some("data/kural.json".to_string()),
                seed: Some(7),
                kural: None,
            },
            output: Some("today.png".to_string()),
            width: Some(2560),
            height: Some(1440),
            fonts: vec!["/opt/fonts/NotoSansTamil.ttf".to_string()],
        };

        let request = build_request(&config, &base(), &args).unwrap();

        assert_eq!(request.data_path, PathBuf::from("data/kural.json"));
        assert_eq!(request.output_path, Some(PathBuf::from("today.png")));
        assert_eq!((request.options.width, request.options.height), (2560, 1440));
        assert_eq!(
            request.fonts,
            vec![
                PathBuf::from("/opt/fonts/NotoSansTamil.ttf"),
                base().join("fonts/Latha.ttf"),
            ]
        );
        assert_eq!(request.selection, Selection::Seeded(7));
        assert!(!request.output_dir.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_build_request_rejects_zero_size_config() {
        let config = KuralConfig { width: 0, ..Default::default() };
        let result = build_request(&config, &base(), &RenderArgs::default());
        assert!(matches!(result, Err(KuralError::ConfigError(_))));
    }

    #[test]
    fn test_selection_prefers_number() {
        let args = SelectArgs { kural: Some("1330".to_string()), ..Default::default() };
        assert_eq!(args.selection(), Selection::Number("1330".to_string()));
    }
}
