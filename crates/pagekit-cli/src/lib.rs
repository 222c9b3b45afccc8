//! pagekit CLI - prints the build configuration composed for a project.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - `config` and `pages` implementations
//! - [`error`] - error types and miette conversion
//! - [`logger`] - structured logging with tracing
//! - [`ui`] - colored status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use pagekit_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
