//! Background painting for the wallpaper canvas.
//!
//! Draws the vertical gradient, the full-canvas tint and the translucent
//! rounded card that frames the text.

use image::{Rgb, RgbImage, Rgba};
use imageproc::pixelops::interpolate;

use super::theme;

/// Number of samples per axis for supersampling anti-aliasing.
const AA_SAMPLES: u32 = 4;

/// Creates a canvas filled with the themed background and card panel.
#[must_use]
pub fn paint_background(width: u32, height: u32) -> RgbImage {
    let mut canvas = vertical_gradient(width, height, theme::GRADIENT_TOP, theme::GRADIENT_BOTTOM);
    fill_overlay(&mut canvas, theme::OVERLAY);
    fill_rounded_card(&mut canvas, theme::CARD_MARGIN, theme::CARD_RADIUS, theme::CARD_FILL);
    canvas
}

/// Builds a canvas whose rows blend linearly from `top` to `bottom`.
///
/// Row `y` uses the ratio `y / height`; channel values are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn vertical_gradient(width: u32, height: u32, top: Rgb<u8>, bottom: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::new(width, height);

    for (y, row) in canvas.enumerate_rows_mut() {
        let ratio = f64::from(y) / f64::from(height);
        let color = Rgb(std::array::from_fn(|channel| {
            f64::from(top[channel])
                .mul_add(1.0 - ratio, f64::from(bottom[channel]) * ratio) as u8
        }));

        for (_, _, pixel) in row {
            *pixel = color;
        }
    }

    canvas
}

/// Composites `color` over every pixel of the canvas.
pub fn fill_overlay(canvas: &mut RgbImage, color: Rgba<u8>) {
    let opacity = f32::from(color[3]) / 255.0;
    let tint = Rgb([color[0], color[1], color[2]]);

    for pixel in canvas.pixels_mut() {
        *pixel = interpolate(tint, *pixel, opacity);
    }
}

/// Composites a rounded rectangle inset by `margin` on every side.
///
/// Corners are anti-aliased with 4x4 supersampling. A canvas too small to
/// leave room inside the margins is left untouched.
pub fn fill_rounded_card(canvas: &mut RgbImage, margin: u32, radius: u32, fill: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let (Some(card_width), Some(card_height)) = (
        width.checked_sub(margin * 2).filter(|w| *w > 0),
        height.checked_sub(margin * 2).filter(|h| *h > 0),
    ) else {
        return;
    };

    // Cap radius to half of the smallest card dimension
    let radius = radius.min(card_width.min(card_height) / 2);
    let opacity = f32::from(fill[3]) / 255.0;
    let tint = Rgb([fill[0], fill[1], fill[2]]);

    for y in 0..card_height {
        for x in 0..card_width {
            let coverage = card_coverage(x, y, card_width, card_height, radius);
            if coverage <= 0.0 {
                continue;
            }

            let pixel = canvas.get_pixel_mut(margin + x, margin + y);
            *pixel = interpolate(tint, *pixel, opacity * coverage);
        }
    }
}

/// Fraction of the card pixel `(x, y)` that lies inside the rounded shape.
fn card_coverage(x: u32, y: u32, card_width: u32, card_height: u32, radius: u32) -> f32 {
    // Distance into the nearest corner square, measured from the card edge
    let corner_x = if x < radius {
        Some(x)
    } else if x >= card_width - radius {
        Some(card_width - 1 - x)
    } else {
        None
    };
    let corner_y = if y < radius {
        Some(y)
    } else if y >= card_height - radius {
        Some(card_height - 1 - y)
    } else {
        None
    };

    match (corner_x, corner_y) {
        (Some(cx), Some(cy)) => corner_coverage(cx, cy, radius),
        _ => 1.0,
    }
}

/// Supersampled coverage of a pixel inside a corner square of size `radius`.
#[allow(clippy::cast_possible_truncation)]
fn corner_coverage(x: u32, y: u32, radius: u32) -> f32 {
    let radius_f = f64::from(radius);
    let sample_step = 1.0 / f64::from(AA_SAMPLES);
    let mut coverage = 0.0_f64;

    for sy in 0..AA_SAMPLES {
        for sx in 0..AA_SAMPLES {
            let sample_x = (f64::from(sx) + 0.5).mul_add(sample_step, f64::from(x));
            let sample_y = (f64::from(sy) + 0.5).mul_add(sample_step, f64::from(y));

            let dx = radius_f - sample_x;
            let dy = radius_f - sample_y;

            if dx.hypot(dy) <= radius_f {
                coverage += 1.0;
            }
        }
    }

    (coverage / f64::from(AA_SAMPLES * AA_SAMPLES)) as f32
}
