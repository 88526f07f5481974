//! Config CLI commands.
//!
//! Commands for managing the Kuralpaper configuration file.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{config_paths, get_config_path};
use crate::error::KuralError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    ///
    /// Creates a new configuration file at the default location with all
    /// available options commented out.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  kuralpaper config init              # Create config at default location
  kuralpaper config init --force      # Overwrite existing config
  kuralpaper config init --path ~/kural.jsonc  # Create at custom path
  kuralpaper config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses ~/.config/kuralpaper/config.jsonc
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show the configuration file search paths.
    ///
    /// Indicates which file is currently in use, if any.
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), KuralError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), KuralError> {
    let config_path = custom_path.unwrap_or_else(default_config_path);

    if config_path.exists() && !force {
        return Err(KuralError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        KuralError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    println!("Configuration file created at: {}", config_path.display());
    println!("\nAll options are commented out by default.");
    println!("Edit the file and uncomment the options you want to configure.");

    Ok(())
}

/// Preferred location for a new configuration file.
fn default_config_path() -> PathBuf {
    config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
}

/// Print the configuration search paths, marking the active one.
fn show_config_path() {
    if let Some(custom) = get_config_path() {
        println!("Using configuration file: {}\n", custom.display());
    }

    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;

    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found; defaults are in use.");
        println!("Run 'kuralpaper config init' to create one.");
    }
}
