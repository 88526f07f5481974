//! Text placement for a quotation wallpaper.
//!
//! [`plan_layout`] computes every block's lines and positions up front, so
//! the arrangement can be inspected without drawing.

use image::{RgbImage, Rgba};

use super::compose::ComposeOptions;
use super::fonts::{FontRole, FontSet};
use super::text::TextBlock;
use super::theme;
use crate::quotes::QuotationRecord;

/// The two quotation lines chosen for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayLines {
    pub first: String,
    pub second: String,
}

impl DisplayLines {
    fn new(first: &str, second: &str) -> Self {
        Self {
            first: first.trim_end_matches('\r').to_string(),
            second: second.trim_end_matches('\r').to_string(),
        }
    }

    /// Both lines separated by a newline.
    #[must_use]
    pub fn joined(&self) -> String { format!("{}\n{}", self.first, self.second) }

    /// Returns `true` if neither line has visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool { self.first.trim().is_empty() && self.second.trim().is_empty() }
}

/// Chooses which pair of script lines to show.
///
/// A primary first line holding a line break is split into the pair; the
/// second half is empty when nothing follows the break. An absent or
/// unsplit primary line selects the fallback pair, as does a split whose
/// first half is empty. The separate second primary field is never read.
#[must_use]
pub fn display_lines(record: &QuotationRecord) -> DisplayLines {
    let primary_1 = record.primary_script_line_1.as_str();
    let fallback = DisplayLines::new(&record.fallback_script_line_1, &record.fallback_script_line_2);

    let chosen = if primary_1.contains('\n') {
        let mut parts = primary_1.split('\n');
        let first = parts.next().unwrap_or_default();
        let second = parts.next().unwrap_or_default();
        DisplayLines::new(first, second)
    } else {
        fallback.clone()
    };

    if chosen.first.trim().is_empty() { fallback } else { chosen }
}

/// Header line: label, quotation number and upper-cased chapter name.
#[must_use]
pub fn header_text(label: &str, record: &QuotationRecord) -> String {
    format!(
        "{label} {} {} {}",
        record.sequence_number,
        theme::HEADER_SEPARATOR,
        record.chapter_name.to_uppercase()
    )
}

/// One positioned block with the face role and color used to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBlock {
    pub role: FontRole,
    pub color: Rgba<u8>,
    pub block: TextBlock,
}

/// The complete text arrangement of a wallpaper.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub header: LayoutBlock,
    pub explanation: LayoutBlock,
    pub quotation: LayoutBlock,
    pub footer: LayoutBlock,
}

impl Layout {
    /// Blocks in drawing order.
    #[must_use]
    pub fn blocks(&self) -> [&LayoutBlock; 4] {
        [&self.header, &self.explanation, &self.quotation, &self.footer]
    }

    /// Draws every block onto `canvas`.
    pub fn draw(&self, canvas: &mut RgbImage, fonts: &FontSet) {
        for entry in self.blocks() {
            entry.block.draw(canvas, fonts.face(entry.role), entry.color);
        }
    }
}

/// Horizontal space available to a block with the given extra inset.
#[allow(clippy::cast_precision_loss)]
fn max_width(width: u32, inset: u32) -> f32 {
    width.saturating_sub(theme::CARD_MARGIN * 2 + inset) as f32
}

/// Plans the header, explanation, quotation and footer blocks.
///
/// The quotation block is placed below the explanation, so its position
/// depends on how many lines the explanation wraps to.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn plan_layout(record: &QuotationRecord, options: &ComposeOptions, fonts: &FontSet) -> Layout {
    let width = options.width;
    let margin = theme::CARD_MARGIN as f32;
    let half_height = (options.height / 2) as f32;

    let lines = display_lines(record);
    if lines.is_blank() {
        tracing::warn!(kural = %record.sequence_number, "quotation has no display lines");
    }
    if record.explanation_text.trim().is_empty() {
        tracing::warn!(kural = %record.sequence_number, "quotation has no explanation");
    }

    let block = |role: FontRole, color: Rgba<u8>, text: &str, center_y: f32, inset: u32| {
        LayoutBlock {
            role,
            color,
            block: TextBlock::centered(text, fonts.face(role), width, center_y, max_width(width, inset)),
        }
    };

    let header = block(
        FontRole::Label,
        theme::HEADER_COLOR,
        &header_text(&options.header_label, record),
        margin + theme::HEADER_OFFSET as f32,
        theme::HEADER_INSET,
    );

    let explanation = block(
        FontRole::Title,
        theme::TITLE_COLOR,
        &record.explanation_text,
        half_height - theme::TITLE_RAISE as f32,
        theme::TITLE_INSET,
    );

    let quotation = block(
        FontRole::Subtitle,
        theme::SUBTITLE_COLOR,
        &lines.joined(),
        half_height + explanation.block.height / 2.0 + theme::SUBTITLE_GAP as f32,
        theme::SUBTITLE_INSET,
    );

    let footer = block(
        FontRole::Tiny,
        theme::FOOTER_COLOR,
        &options.footer_caption,
        options.height as f32 - margin - theme::FOOTER_OFFSET as f32,
        theme::FOOTER_INSET,
    );

    Layout { header, explanation, quotation, footer }
}
