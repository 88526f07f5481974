//! Wallpaper composition: background, card, text and PNG output.

use std::path::{Path, PathBuf};

use image::RgbImage;

use super::canvas::paint_background;
use super::fonts::FontSet;
use super::layout::plan_layout;
use super::output::{ComposeError, write_png};
use crate::config::{
    DEFAULT_FOOTER_CAPTION, DEFAULT_HEADER_LABEL, DEFAULT_HEIGHT, DEFAULT_WIDTH, KuralConfig,
};
use crate::quotes::QuotationRecord;

/// Canvas size and fixed captions for a composed wallpaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    pub width: u32,
    pub height: u32,
    pub header_label: String,
    pub footer_caption: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            footer_caption: DEFAULT_FOOTER_CAPTION.to_string(),
        }
    }
}

impl From<&KuralConfig> for ComposeOptions {
    fn from(config: &KuralConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            header_label: config.header_label.clone(),
            footer_caption: config.footer_caption.clone(),
        }
    }
}

/// Renders `record` into an in-memory canvas.
#[must_use]
pub fn render(record: &QuotationRecord, options: &ComposeOptions, fonts: &FontSet) -> RgbImage {
    let mut canvas = paint_background(options.width, options.height);
    plan_layout(record, options, fonts).draw(&mut canvas, fonts);
    canvas
}

/// Renders `record` and saves it as a PNG at `output_path`.
///
/// # Arguments
///
/// * `record` - The quotation to render
/// * `output_path` - Destination file; replaced atomically if it exists
/// * `options` - Canvas size and captions
/// * `fonts` - Faces used for each text block
///
/// # Returns
///
/// The path the image was written to.
///
/// # Errors
///
/// Returns `ComposeError` if the image cannot be encoded or written.
pub fn compose(
    record: &QuotationRecord,
    output_path: &Path,
    options: &ComposeOptions,
    fonts: &FontSet,
) -> Result<PathBuf, ComposeError> {
    tracing::debug!(
        kural = %record.sequence_number,
        width = options.width,
        height = options.height,
        "composing wallpaper"
    );

    let canvas = render(record, options, fonts);
    write_png(&canvas, output_path)?;

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = ComposeOptions::default();
        assert_eq!((options.width, options.height), (1920, 1080));
        assert_eq!(options.header_label, "THIRUKKURAL");
        assert_eq!(options.footer_caption, "~ THIRUVALLUVAR ~");
    }

    #[test]
    fn test_options_from_config() {
        let config = KuralConfig {
            width: 2560,
            height: 1440,
            footer_caption: "VALLUVAR".to_string(),
            ..Default::default()
        };
        let options = ComposeOptions::from(&config);
        assert_eq!((options.width, options.height), (2560, 1440));
        assert_eq!(options.footer_caption, "VALLUVAR");
        assert_eq!(options.header_label, "THIRUKKURAL");
    }

    #[test]
    fn test_render_dimensions_and_text_pixels() {
        let options = ComposeOptions { width: 800, height: 600, ..Default::default() };
        let record = QuotationRecord {
            explanation_text: "Fate".to_string(),
            sequence_number: "1330".to_string(),
            chapter_name: "Fate".to_string(),
            ..Default::default()
        };

        let canvas = render(&record, &options, &FontSet::builtin());
        assert_eq!(canvas.dimensions(), (800, 600));
        // The white explanation text is the only pure white on the canvas
        assert!(canvas.pixels().any(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let options = ComposeOptions { width: 640, height: 480, ..Default::default() };
        let record = QuotationRecord {
            explanation_text: "Learning is wealth none can destroy.".to_string(),
            ..Default::default()
        };
        let fonts = FontSet::builtin();

        assert_eq!(render(&record, &options, &fonts), render(&record, &options, &fonts));
    }
}
