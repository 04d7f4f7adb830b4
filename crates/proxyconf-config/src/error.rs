//! Error types for proxyconf-config

use crate::provider::ProviderKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot add the {requested} provider: the {existing} provider already exists")]
    ProviderConflict {
        existing: ProviderKind,
        requested: ProviderKind,
    },

    #[error("entry point {name} already exists")]
    DuplicateEntryPoint { name: String },

    #[error("unknown provider: {name}")]
    UnknownProvider { name: String },
}
