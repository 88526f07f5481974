//! Colors, sizes and offsets of the wallpaper design.

use image::{Rgb, Rgba};

/// Background gradient color at the top edge.
pub const GRADIENT_TOP: Rgb<u8> = Rgb([26, 26, 46]);

/// Background gradient color at the bottom edge.
pub const GRADIENT_BOTTOM: Rgb<u8> = Rgb([15, 33, 62]);

/// Full-canvas tint composited over the gradient.
pub const OVERLAY: Rgba<u8> = Rgba([15, 52, 96, 77]);

/// Fill of the card panel.
pub const CARD_FILL: Rgba<u8> = Rgba([15, 52, 96, 160]);

/// Distance from every canvas edge to the card panel.
pub const CARD_MARGIN: u32 = 150;

/// Corner radius of the card panel.
pub const CARD_RADIUS: u32 = 30;

pub const HEADER_COLOR: Rgba<u8> = Rgba([244, 162, 97, 255]);
pub const TITLE_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const SUBTITLE_COLOR: Rgba<u8> = Rgba([168, 218, 220, 200]);
pub const FOOTER_COLOR: Rgba<u8> = Rgba([233, 69, 96, 255]);

/// Nominal pixel size of the explanation face.
pub const TITLE_SIZE: f32 = 42.0;

/// Nominal pixel size of the quotation face.
pub const SUBTITLE_SIZE: f32 = 28.0;

/// Nominal pixel size of the header face.
pub const LABEL_SIZE: f32 = 24.0;

/// Nominal pixel size of the footer face.
pub const TINY_SIZE: f32 = 18.0;

/// Line height as a multiple of the nominal face size.
pub const LINE_SPACING: f32 = 1.3;

/// Header center below the card's top edge.
pub const HEADER_OFFSET: i32 = 60;

/// Explanation center above the canvas midline.
pub const TITLE_RAISE: i32 = 40;

/// Gap between the explanation block and the quotation block center.
pub const SUBTITLE_GAP: i32 = 50;

/// Footer center above the card's bottom edge.
pub const FOOTER_OFFSET: i32 = 80;

// Horizontal insets, added to twice the card margin, that bound each block.
pub const HEADER_INSET: u32 = 100;
pub const TITLE_INSET: u32 = 150;
pub const SUBTITLE_INSET: u32 = 200;
pub const FOOTER_INSET: u32 = 0;

/// Separator between the quotation number and the chapter name.
pub const HEADER_SEPARATOR: &str = "\u{2022}";
