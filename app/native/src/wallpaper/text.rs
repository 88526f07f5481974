//! Word wrapping and block centering.

use image::{RgbImage, Rgba};

use super::face::TextFace;
use super::theme::LINE_SPACING;

/// Greedily packs the whitespace-delimited words of `text` into lines no
/// wider than `max_width`.
///
/// A word wider than `max_width` on its own is kept whole on its own line.
/// Line breaks in `text` are treated as ordinary whitespace, and no empty
/// lines are produced.
#[must_use]
pub fn wrap_lines(text: &str, face: &dyn TextFace, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if face.measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// A single line with its top-left drawing position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: f32,
}

/// A wrapped block of lines centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<PlacedLine>,
    /// Distance between consecutive line tops.
    pub line_height: f32,
    /// Total block height (`lines × line_height`).
    pub height: f32,
}

impl TextBlock {
    /// Wraps `text` to `max_width` and centers it horizontally across
    /// `canvas_width` and vertically on `center_y`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn centered(
        text: &str,
        face: &dyn TextFace,
        canvas_width: u32,
        center_y: f32,
        max_width: f32,
    ) -> Self {
        let wrapped = wrap_lines(text, face, max_width);
        let line_height = face.size() * LINE_SPACING;
        let height = wrapped.len() as f32 * line_height;
        let top = center_y - height / 2.0;

        let lines = wrapped
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let width = face.measure(&line);
                PlacedLine {
                    x: ((canvas_width as f32 - width) / 2.0).floor() as i32,
                    y: (index as f32).mul_add(line_height, top).floor() as i32,
                    width,
                    text: line,
                }
            })
            .collect();

        Self { lines, line_height, height }
    }

    /// Returns `true` if the block has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Draws every line of the block with `face`.
    pub fn draw(&self, canvas: &mut RgbImage, face: &dyn TextFace, color: Rgba<u8>) {
        for line in &self.lines {
            face.draw(canvas, line.x, line.y, &line.text, color);
        }
    }
}
