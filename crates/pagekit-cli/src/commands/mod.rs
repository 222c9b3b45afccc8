//! Command implementations for the pagekit CLI.
//!
//! - [`config`] - compose and print the build configuration
//! - [`pages`] - list discovered page templates

pub mod config;
pub mod pages;
pub(crate) mod utils;

pub use config::execute as config_execute;
pub use pages::execute as pages_execute;
