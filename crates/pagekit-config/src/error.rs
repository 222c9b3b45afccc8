//! Error types for template discovery and settings loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The template directory could not be listed.
    #[error("failed to list template directory {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `pagekit.toml` or a `PAGEKIT_*` variable did not fit the settings schema.
    #[error("invalid project settings: {0}")]
    Settings(#[from] Box<figment::Error>),
}

impl ConfigError {
    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors raised while listing the template directory.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Settings(Box::new(err))
    }
}
