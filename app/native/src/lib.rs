//! Kuralpaper - renders a Thirukkural couplet onto a wallpaper image.
//!
//! The library loads a collection of quotations, picks one, lays its text out
//! over a gradient background and writes the result as a PNG. The binary
//! wraps this in a CLI that can also set the image as the desktop background.

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod quotes;
pub mod schema;
pub mod wallpaper;
