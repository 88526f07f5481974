//! Built-in bitmap face used when no font file can be loaded.
//!
//! A classic 5x8 column-major glyph table covering printable ASCII. Each glyph
//! is five columns; bit 0 of a column is the top row. Characters outside the
//! table advance the caret without drawing.

use image::{RgbImage, Rgba};

use super::face::{TextFace, blend_pixel};

const GLYPH_COLUMNS: u32 = 5;
const GLYPH_ROWS: u32 = 8;

/// Columns per glyph cell, including one column of spacing.
const CELL_WIDTH: u32 = GLYPH_COLUMNS + 1;

/// Default magnification of the bitmap.
pub const DEFAULT_SCALE: u32 = 2;

/// Glyphs for `' '` through `'~'`.
#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x5F, 0x00, 0x00], [0x00, 0x07, 0x00, 0x07, 0x00],
    [0x14, 0x7F, 0x14, 0x7F, 0x14], [0x24, 0x2A, 0x7F, 0x2A, 0x12], [0x23, 0x13, 0x08, 0x64, 0x62],
    [0x36, 0x49, 0x56, 0x20, 0x50], [0x00, 0x08, 0x07, 0x03, 0x00], [0x00, 0x1C, 0x22, 0x41, 0x00],
    [0x00, 0x41, 0x22, 0x1C, 0x00], [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], [0x08, 0x08, 0x3E, 0x08, 0x08],
    [0x00, 0x80, 0x70, 0x30, 0x00], [0x08, 0x08, 0x08, 0x08, 0x08], [0x00, 0x00, 0x60, 0x60, 0x00],
    [0x20, 0x10, 0x08, 0x04, 0x02], [0x3E, 0x51, 0x49, 0x45, 0x3E], [0x00, 0x42, 0x7F, 0x40, 0x00],
    [0x72, 0x49, 0x49, 0x49, 0x46], [0x21, 0x41, 0x49, 0x4D, 0x33], [0x18, 0x14, 0x12, 0x7F, 0x10],
    [0x27, 0x45, 0x45, 0x45, 0x39], [0x3C, 0x4A, 0x49, 0x49, 0x31], [0x41, 0x21, 0x11, 0x09, 0x07],
    [0x36, 0x49, 0x49, 0x49, 0x36], [0x46, 0x49, 0x49, 0x29, 0x1E], [0x00, 0x00, 0x14, 0x00, 0x00],
    [0x00, 0x40, 0x34, 0x00, 0x00], [0x00, 0x08, 0x14, 0x22, 0x41], [0x14, 0x14, 0x14, 0x14, 0x14],
    [0x00, 0x41, 0x22, 0x14, 0x08], [0x02, 0x01, 0x59, 0x09, 0x06], [0x3E, 0x41, 0x5D, 0x59, 0x4E],
    [0x7C, 0x12, 0x11, 0x12, 0x7C], [0x7F, 0x49, 0x49, 0x49, 0x36], [0x3E, 0x41, 0x41, 0x41, 0x22],
    [0x7F, 0x41, 0x41, 0x41, 0x3E], [0x7F, 0x49, 0x49, 0x49, 0x41], [0x7F, 0x09, 0x09, 0x09, 0x01],
    [0x3E, 0x41, 0x41, 0x51, 0x73], [0x7F, 0x08, 0x08, 0x08, 0x7F], [0x00, 0x41, 0x7F, 0x41, 0x00],
    [0x20, 0x40, 0x41, 0x3F, 0x01], [0x7F, 0x08, 0x14, 0x22, 0x41], [0x7F, 0x40, 0x40, 0x40, 0x40],
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], [0x7F, 0x04, 0x08, 0x10, 0x7F], [0x3E, 0x41, 0x41, 0x41, 0x3E],
    [0x7F, 0x09, 0x09, 0x09, 0x06], [0x3E, 0x41, 0x51, 0x21, 0x5E], [0x7F, 0x09, 0x19, 0x29, 0x46],
    [0x26, 0x49, 0x49, 0x49, 0x32], [0x03, 0x01, 0x7F, 0x01, 0x03], [0x3F, 0x40, 0x40, 0x40, 0x3F],
    [0x1F, 0x20, 0x40, 0x20, 0x1F], [0x3F, 0x40, 0x38, 0x40, 0x3F], [0x63, 0x14, 0x08, 0x14, 0x63],
    [0x03, 0x04, 0x78, 0x04, 0x03], [0x61, 0x59, 0x49, 0x4D, 0x43], [0x00, 0x7F, 0x41, 0x41, 0x41],
    [0x02, 0x04, 0x08, 0x10, 0x20], [0x00, 0x41, 0x41, 0x41, 0x7F], [0x04, 0x02, 0x01, 0x02, 0x04],
    [0x40, 0x40, 0x40, 0x40, 0x40], [0x00, 0x03, 0x07, 0x08, 0x00], [0x20, 0x54, 0x54, 0x78, 0x40],
    [0x7F, 0x28, 0x44, 0x44, 0x38], [0x38, 0x44, 0x44, 0x44, 0x28], [0x38, 0x44, 0x44, 0x28, 0x7F],
    [0x38, 0x54, 0x54, 0x54, 0x18], [0x00, 0x08, 0x7E, 0x09, 0x02], [0x18, 0xA4, 0xA4, 0x9C, 0x78],
    [0x7F, 0x08, 0x04, 0x04, 0x78], [0x00, 0x44, 0x7D, 0x40, 0x00], [0x20, 0x40, 0x40, 0x3D, 0x00],
    [0x7F, 0x10, 0x28, 0x44, 0x00], [0x00, 0x41, 0x7F, 0x40, 0x00], [0x7C, 0x04, 0x78, 0x04, 0x78],
    [0x7C, 0x08, 0x04, 0x04, 0x78], [0x38, 0x44, 0x44, 0x44, 0x38], [0xFC, 0x18, 0x24, 0x24, 0x18],
    [0x18, 0x24, 0x24, 0x18, 0xFC], [0x7C, 0x08, 0x04, 0x04, 0x08], [0x48, 0x54, 0x54, 0x54, 0x24],
    [0x04, 0x04, 0x3F, 0x44, 0x24], [0x3C, 0x40, 0x40, 0x20, 0x7C], [0x1C, 0x20, 0x40, 0x20, 0x1C],
    [0x3C, 0x40, 0x30, 0x40, 0x3C], [0x44, 0x28, 0x10, 0x28, 0x44], [0x4C, 0x90, 0x90, 0x90, 0x7C],
    [0x44, 0x64, 0x54, 0x4C, 0x44], [0x00, 0x08, 0x36, 0x41, 0x00], [0x00, 0x00, 0x77, 0x00, 0x00],
    [0x00, 0x41, 0x36, 0x08, 0x00], [0x02, 0x01, 0x02, 0x04, 0x02],
];

/// Returns the column bitmap for `ch`, if the table covers it.
fn glyph(ch: char) -> Option<&'static [u8; 5]> {
    let index = u32::from(ch).checked_sub(u32::from(' '))?;
    GLYPHS.get(usize::try_from(index).ok()?)
}

/// Fixed-pitch bitmap face.
///
/// Its size is the same for every role, so text laid out with it is smaller
/// than with an outline font.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFace {
    scale: u32,
}

impl Default for BuiltinFace {
    fn default() -> Self { Self::new(DEFAULT_SCALE) }
}

impl BuiltinFace {
    /// Creates a face magnified `scale` times (minimum 1).
    #[must_use]
    pub fn new(scale: u32) -> Self { Self { scale: scale.max(1) } }

    fn advance(self) -> u32 { CELL_WIDTH * self.scale }
}

impl TextFace for BuiltinFace {
    #[allow(clippy::cast_precision_loss)]
    fn size(&self) -> f32 { (GLYPH_ROWS * self.scale) as f32 }

    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str) -> f32 {
        let count = text.chars().filter(|ch| !ch.is_control()).count();
        (count * self.advance() as usize) as f32
    }

    #[allow(clippy::cast_possible_wrap)]
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        let scale = self.scale as i32;
        let mut caret = x;

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            if let Some(columns) = glyph(ch) {
                for (column, bits) in (0_i32..).zip(columns.iter()) {
                    for row in 0..GLYPH_ROWS as i32 {
                        if bits & (1 << row) == 0 {
                            continue;
                        }

                        for dy in 0..scale {
                            for dx in 0..scale {
                                let px = caret + column * scale + dx;
                                let py = y + row * scale + dy;
                                blend_pixel(canvas, px, py, color, 1.0);
                            }
                        }
                    }
                }
            }

            caret += self.advance() as i32;
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    #[test]
    fn test_glyph_table_bounds() {
        assert!(glyph(' ').is_some());
        assert!(glyph('~').is_some());
        assert!(glyph('\u{7f}').is_none());
        assert!(glyph('\u{0B85}').is_none());
        assert_eq!(glyph(' '), Some(&[0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_measure_is_fixed_pitch() {
        let face = BuiltinFace::default();
        assert!((face.measure("Fate") - 48.0).abs() < f32::EPSILON);
        assert!((face.measure("") - 0.0).abs() < f32::EPSILON);
        // Non-ASCII characters still advance
        assert!((face.measure("அகர") - face.measure("abc")).abs() < f32::EPSILON);
    }

    #[test]
    fn test_size_scales() {
        assert!((BuiltinFace::new(1).size() - 8.0).abs() < f32::EPSILON);
        assert!((BuiltinFace::default().size() - 16.0).abs() < f32::EPSILON);
        assert!((BuiltinFace::new(0).size() - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_draw_marks_pixels() {
        let mut canvas = RgbImage::from_pixel(40, 20, Rgb([0, 0, 0]));
        BuiltinFace::new(1).draw(&mut canvas, 2, 2, "I", Rgba([255, 255, 255, 255]));

        // Middle column of 'I' is a full vertical bar in rows 0-6
        assert_eq!(canvas.get_pixel(4, 2), &Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(4, 8), &Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_draw_space_and_unknown_leave_canvas_blank() {
        let mut canvas = RgbImage::from_pixel(40, 20, Rgb([0, 0, 0]));
        BuiltinFace::default().draw(&mut canvas, 0, 0, " \u{0B85}", Rgba([255, 255, 255, 255]));
        assert!(canvas.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        BuiltinFace::default().draw(&mut canvas, -6, -6, "WWW", Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.dimensions(), (4, 4));
    }
}
