//! Static configuration model for proxyconf.
//!
//! This crate holds the in-memory configuration of the proxy (entry points
//! and a provider), the default configurations used as diff references,
//! and a builder that rejects conflicting additions.

pub mod builder;
pub mod config;
pub mod error;
pub mod provider;

pub use builder::ConfigurationBuilder;
pub use config::{
    AccessLog, Api, Configuration, EntryPoint, EntryPoints, Global, Log, default_configuration,
};
pub use error::{Error, Result};
pub use provider::{
    ClientTls, DockerProvider, FileProvider, KubernetesCrdProvider, ProviderKind, Providers,
};
