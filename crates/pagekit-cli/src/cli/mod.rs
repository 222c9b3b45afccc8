//! Command-line interface definition for pagekit.
//!
//! # Command Structure
//!
//! - `pagekit config` - print the composed build configuration
//! - `pagekit pages` - list the page templates that would be generated

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{Command, ConfigArgs, PagesArgs};
pub use enums::*;

/// pagekit - mode-aware build configuration for multi-page sites
#[derive(Parser, Debug)]
#[command(
    name = "pagekit",
    version,
    about = "Compose build configuration for multi-page sites",
    long_about = "pagekit discovers HTML page templates, builds a base bundler configuration\n\
                  and merges the production or development overlay selected by NODE_ENV."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
