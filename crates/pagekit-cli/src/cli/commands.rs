use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available pagekit subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the composed build configuration
    ///
    /// Discovers page templates, builds the base configuration and merges
    /// the overlay for the selected mode.
    Config(ConfigArgs),

    /// List discovered page templates
    ///
    /// Prints one line per template in the views directory, in directory
    /// listing order.
    Pages(PagesArgs),
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Project root containing pagekit.toml and the views directory
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Build mode, overriding the mode environment variable
    ///
    /// Without this flag, NODE_ENV (or the configured mode_var) decides:
    /// "development" selects development, anything else production.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Serialization format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the pages command
#[derive(Args, Debug)]
pub struct PagesArgs {
    /// Project root containing pagekit.toml and the views directory
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}
