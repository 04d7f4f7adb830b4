//! Error types for proxyconf-export

use std::path::PathBuf;

/// Result type for proxyconf-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot encode static configuration in {format}: {message}")]
    Encode { format: String, message: String },

    #[error("cannot decode static configuration from {format}: {message}")]
    Decode { format: String, message: String },

    #[error("cannot read template {}: {source}", path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("cannot process ports of entry point {entry_point}: {source}")]
    PortExtraction {
        entry_point: String,
        #[source]
        source: Box<Error>,
    },

    #[error("unsupported format: {name}")]
    UnknownFormat { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn encode(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Encode {
            format: format.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            format: format.into(),
            message: message.to_string(),
        }
    }
}
