//! Error types for numask.

use std::path::PathBuf;

use numask_core::EditError;

/// Result type alias for numask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in numask.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edit pointed outside the field's text.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// The configuration file could not be read.
    #[error("Failed to read mask configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid TOML or has unknown values.
    #[error("Invalid mask configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize mask configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Create a configuration I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}
