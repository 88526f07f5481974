#![allow(clippy::multiple_crate_versions)]

//! Kuralpaper - daily Thirukkural wallpaper generator.
//!
//! Without a subcommand the binary generates today's wallpaper and sets it
//! as the desktop background. See `kuralpaper --help` for the other commands.

use clap::Parser;
use kuralpaper_lib::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = cli.execute() {
        eprintln!("kuralpaper: {err}");
        std::process::exit(1);
    }
}

/// Installs the stderr log subscriber.
///
/// `--verbose` forces debug output; otherwise `RUST_LOG` is honored and
/// falls back to info.
fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("kuralpaper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kuralpaper=info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
