//! CLI module for Kuralpaper.
//!
//! Every command runs to completion in the foreground: pick a quotation,
//! render it, and optionally hand the image to the desktop.

mod commands;
mod output;

pub use commands::{Cli, Commands, ConfigCommands, RenderArgs, SelectArgs};
pub use output::{highlight_json, print_highlighted_json};
