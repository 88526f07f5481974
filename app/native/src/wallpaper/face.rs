//! Text faces: measuring and drawing a single line of text.

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage, Rgba};
use imageproc::pixelops::interpolate;

/// A sized typeface that can measure and draw a single line of text.
pub trait TextFace {
    /// Nominal size in pixels, used for line spacing.
    fn size(&self) -> f32;

    /// Width in pixels of `text` drawn on one line.
    fn measure(&self, text: &str) -> f32;

    /// Draws `text` with its top-left corner at `(x, y)`.
    ///
    /// The alpha channel of `color` is honored; pixels outside the canvas
    /// are skipped.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgba<u8>);
}

/// A glyph placed relative to the pen origin on the baseline.
#[derive(Debug, Clone, Copy)]
struct PlacedGlyph {
    id: GlyphId,
    x: f32,
    y: f32,
}

/// An outline (TrueType/OpenType) font at a fixed pixel size.
///
/// Text is shaped with `rustybuzz` before it is measured or drawn, so Tamil
/// vowel signs are reordered and joined the way the font expects.
#[derive(Clone)]
pub struct OutlineFace {
    font: FontArc,
    scale: PxScale,
    size: f32,
}

impl OutlineFace {
    /// Creates a face whose em square is `size` pixels tall.
    #[must_use]
    pub fn new(font: FontArc, size: f32) -> Self {
        // PxScale is the ascent-to-descent height; convert from em size
        let scale = font.units_per_em().map_or_else(
            || PxScale::from(size),
            |units| PxScale::from(size * font.height_unscaled() / units),
        );

        Self { font, scale, size }
    }

    /// Shapes `text` into positioned glyphs and returns them with the total
    /// advance in pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn shape(&self, text: &str) -> (Vec<PlacedGlyph>, f32) {
        let text: String = text.chars().filter(|ch| !ch.is_control()).collect();
        if text.is_empty() {
            return (Vec::new(), 0.0);
        }

        let Some(face) = rustybuzz::Face::from_slice(self.font.font_data(), 0) else {
            return self.layout_by_codepoint(&text);
        };

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(&text);
        buffer.guess_segment_properties();
        let shaped = rustybuzz::shape(&face, &[], buffer);

        let scaled = self.font.as_scaled(self.scale);
        let (h_factor, v_factor) = (scaled.h_scale_factor(), scaled.v_scale_factor());

        let mut caret = 0.0_f32;
        let glyphs = shaped
            .glyph_infos()
            .iter()
            .zip(shaped.glyph_positions())
            .map(|(info, position)| {
                let glyph = PlacedGlyph {
                    id: GlyphId(info.glyph_id as u16),
                    x: (position.x_offset as f32).mul_add(h_factor, caret),
                    // Font units grow upwards, pixels grow downwards
                    y: -(position.y_offset as f32) * v_factor,
                };
                caret += position.x_advance as f32 * h_factor;
                glyph
            })
            .collect();

        (glyphs, caret)
    }

    /// Maps each character through the cmap with kerning. Used only when
    /// the shaper cannot read the font tables.
    fn layout_by_codepoint(&self, text: &str) -> (Vec<PlacedGlyph>, f32) {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0_f32;
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(previous) = previous {
                caret += scaled.kern(previous, id);
            }

            glyphs.push(PlacedGlyph { id, x: caret, y: 0.0 });

            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        (glyphs, caret)
    }
}

impl TextFace for OutlineFace {
    fn size(&self) -> f32 { self.size }

    fn measure(&self, text: &str) -> f32 { self.shape(text).1 }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        let baseline = y as f32 + self.font.as_scaled(self.scale).ascent();
        let origin = x as f32;

        let (glyphs, _) = self.shape(text);
        for placed in glyphs {
            let glyph = placed
                .id
                .with_scale_and_position(self.scale, point(origin + placed.x, baseline + placed.y));
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                // Whitespace
                continue;
            };

            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                blend_pixel(canvas, px, py, color, coverage);
            });
        }
    }
}

/// Composites `color` at `coverage` over the canvas pixel at `(x, y)`.
pub(crate) fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };

    if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
        let weight = (coverage * f32::from(color[3]) / 255.0).clamp(0.0, 1.0);
        *pixel = interpolate(Rgb([color[0], color[1], color[2]]), *pixel, weight);
    }
}
