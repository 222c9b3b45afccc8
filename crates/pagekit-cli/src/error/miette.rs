//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::Filesystem { path, source } => miette::miette!(
            help = "Create the directory or point `views_dir` in pagekit.toml at your templates",
            "Cannot list template directory {}: {}",
            path.display(),
            source
        ),
        ConfigError::Settings(e) => miette::miette!(
            help = "Check pagekit.toml and PAGEKIT_* environment variables",
            "Invalid project settings: {}",
            e
        ),
    }
}
