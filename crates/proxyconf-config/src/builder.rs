//! Incremental construction of a [`Configuration`]
//!
//! Every step consumes the builder and hands it back on success, so a
//! rejected step leaves nothing to keep building on:
//!
//! ```
//! use proxyconf_config::ConfigurationBuilder;
//!
//! # fn main() -> proxyconf_config::Result<()> {
//! let conf = ConfigurationBuilder::new()
//!     .add_docker_provider()?
//!     .add_entry_point("web", ":8000")?
//!     .build();
//! assert_eq!(conf.entry_points.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::config::{Configuration, EntryPoint};
use crate::error::{Error, Result};
use crate::provider::{
    DockerProvider, FileProvider, KubernetesCrdProvider, ProviderKind, Providers,
};

/// Builds a configuration holding at most one provider.
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    conf: Configuration,
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationBuilder {
    /// Start from an empty providers section and no entry points.
    pub fn new() -> Self {
        Self {
            conf: Configuration {
                providers: Some(Providers::default()),
                ..Configuration::default()
            },
        }
    }

    /// Current state of the configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.conf
    }

    pub fn build(self) -> Configuration {
        self.conf
    }

    /// Enable the default form of `kind`.
    pub fn add_provider(self, kind: ProviderKind) -> Result<Self> {
        match kind {
            ProviderKind::File => self.add_file_provider(""),
            ProviderKind::Docker => self.add_docker_provider(),
            ProviderKind::KubernetesCrd => self.add_kubernetes_provider(),
        }
    }

    pub fn add_docker_provider(self) -> Result<Self> {
        self.set_provider(ProviderKind::Docker, |providers| {
            providers.docker = Some(DockerProvider::default())
        })
    }

    pub fn add_kubernetes_provider(self) -> Result<Self> {
        self.set_provider(ProviderKind::KubernetesCrd, |providers| {
            providers.kubernetes_crd = Some(KubernetesCrdProvider::default())
        })
    }

    /// Enable the file provider reading `directory`.
    pub fn add_file_provider(self, directory: impl Into<String>) -> Result<Self> {
        let file = FileProvider::with_directory(directory);
        self.set_provider(ProviderKind::File, |providers| providers.file = Some(file))
    }

    /// Add an entry point. The address is stored verbatim.
    pub fn add_entry_point(
        mut self,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if self.conf.entry_points.contains_key(&name) {
            return Err(Error::DuplicateEntryPoint { name });
        }

        tracing::debug!(entry_point = %name, "adding entry point");
        self.conf.entry_points.insert(name, EntryPoint::new(address));
        Ok(self)
    }

    fn set_provider(
        mut self,
        requested: ProviderKind,
        enable: impl FnOnce(&mut Providers),
    ) -> Result<Self> {
        let providers = self.conf.providers.get_or_insert_with(Providers::default);
        if let Some(existing) = providers.kind() {
            return Err(Error::ProviderConflict {
                existing,
                requested,
            });
        }

        tracing::debug!(provider = %requested, "adding provider");
        enable(providers);
        Ok(self)
    }
}
