//! CLI command definitions using Clap.
//!
//! - `config_cmd` - Configuration file commands
//! - `render` - Arguments shared by the rendering commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use super::output::print_highlighted_json;
use crate::config::ConfigError;
use crate::error::KuralError;
use crate::wallpaper::{GeneratedWallpaper, manager};
use crate::{config, schema};

pub mod config_cmd;
pub mod render;

pub use config_cmd::ConfigCommands;
pub use render::{RenderArgs, SelectArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Kuralpaper - renders a Thirukkural couplet onto a wallpaper and sets it
/// as the desktop background.
///
/// Running without a subcommand is the same as `kuralpaper apply`.
#[derive(Parser, Debug)]
#[command(name = "kuralpaper")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Generate a wallpaper and set it as the desktop background.
    ///
    /// The desktop is left unchanged when `applyWallpaper` is false.
    Apply(RenderArgs),

    /// Generate a wallpaper and print its path.
    Generate(RenderArgs),

    /// Print the selected quotation as JSON.
    Quote(SelectArgs),

    /// Configuration file management commands.
    ///
    /// Initialize, view, and manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Kuralpaper configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(kuralpaper completions --shell zsh)"
    ///   kuralpaper completions --shell fish > ~/.config/fish/completions/kuralpaper.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), KuralError> {
        if let Some(path) = self.config_path() {
            config::load_custom_config(&path).map_err(|err| match err {
                ConfigError::NotFound => KuralError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )),
                err => KuralError::ConfigError(format!("{}: {err}", path.display())),
            })?;
        }

        match &self.command {
            None => run_apply(&self.render),
            Some(Commands::Apply(args)) => run_apply(args),
            Some(Commands::Generate(args)) => run_generate(args),
            Some(Commands::Quote(args)) => run_quote(args),
            Some(Commands::Config(cmd)) => config_cmd::execute(cmd),

            Some(Commands::Schema) => {
                println!("{}", schema::print_schema());
                Ok(())
            }

            Some(Commands::Completions { shell }) => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "kuralpaper", &mut io::stdout());
    }
}

/// Generates a wallpaper and applies it unless disabled in the configuration.
fn run_apply(args: &RenderArgs) -> Result<(), KuralError> {
    let config = config::get_config();
    let request = render::build_request(config, &config::base_dir(), args)?;

    let generated = if config.apply_wallpaper {
        manager::apply(&request)?
    } else {
        tracing::info!("applyWallpaper is disabled, leaving the desktop unchanged");
        manager::generate(&request)?
    };

    print_generated(&generated);
    Ok(())
}

/// Generates a wallpaper without touching the desktop.
fn run_generate(args: &RenderArgs) -> Result<(), KuralError> {
    let config = config::get_config();
    let request = render::build_request(config, &config::base_dir(), args)?;

    print_generated(&manager::generate(&request)?);
    Ok(())
}

/// Prints the selected quotation.
fn run_quote(args: &SelectArgs) -> Result<(), KuralError> {
    let config = config::get_config();
    let render_args = RenderArgs { select: args.clone(), ..RenderArgs::default() };
    let request = render::build_request(config, &config::base_dir(), &render_args)?;

    let record = manager::load_quotation(&request)?;
    print_highlighted_json(&serde_json::to_value(&record)?);
    Ok(())
}

fn print_generated(generated: &GeneratedWallpaper) { println!("{}", generated.path.display()); }
