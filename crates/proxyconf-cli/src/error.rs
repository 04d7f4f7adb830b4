//! Error types for proxyconf-cli

use std::path::PathBuf;

use proxyconf_export::OutputFormat;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from proxyconf-config
    #[error(transparent)]
    Config(#[from] proxyconf_config::Error),

    /// Error from proxyconf-export
    #[error(transparent)]
    Convert(#[from] proxyconf_export::Error),

    /// The source file could not be read back into a configuration
    #[error("cannot import source file {}: {source}", path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: proxyconf_export::Error,
    },

    /// The configuration could not be rendered
    #[error("cannot export to {format} format: {source}")]
    Export {
        format: OutputFormat,
        #[source]
        source: proxyconf_export::Error,
    },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
