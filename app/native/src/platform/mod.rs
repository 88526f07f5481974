//! Platform helpers shared across Kuralpaper.
//!
//! - [`path`] - Shell-like path expansion and resolution

pub mod path;

pub use path::{expand, expand_and_resolve};
