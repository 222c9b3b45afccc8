//! pagekit CLI - compose build configuration for multi-page sites.
//!
//! Parses arguments, initializes logging and dispatches the command.

use clap::Parser;
use miette::Result;
use pagekit_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Pages(pages_args) => commands::pages_execute(pages_args),
    };

    result.map_err(error::cli_error_to_miette)
}
