//! Wallpaper module for Kuralpaper.
//!
//! Renders a quotation onto a gradient background with a translucent card,
//! writes it as a PNG and sets it as the desktop wallpaper.

pub mod builtin_font;
pub mod canvas;
pub mod compose;
pub mod desktop;
pub mod face;
pub mod fonts;
pub mod layout;
pub mod manager;
pub mod output;
pub mod text;
pub mod theme;

pub use compose::{ComposeOptions, compose, render};
pub use desktop::{WallpaperError, set_wallpaper};
pub use fonts::{
    FileFontSource, FontLoadError, FontResolution, FontRole, FontSet, FontSource, resolve_fonts,
};
pub use layout::{DisplayLines, Layout, display_lines, plan_layout};
pub use manager::{GeneratedWallpaper, ManagerError, Selection, WallpaperRequest};
pub use output::ComposeError;
