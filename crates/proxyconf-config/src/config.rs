//! Static configuration model
//!
//! Mirrors the shape of the proxy's static configuration file. Field names
//! are serialized in camelCase so TOML and YAML documents written by hand
//! for the proxy can be read back as-is.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::provider::{FileProvider, ProviderKind, Providers};

/// Entry points keyed by name. Ordered so every rendering is stable.
pub type EntryPoints = BTreeMap<String, EntryPoint>;

/// Directory used by the file provider of the default configurations.
pub const DEFAULT_FILE_DIRECTORY: &str = "conf";

/// Entry points shared by every default configuration.
pub const DEFAULT_ENTRY_POINTS: &[(&str, &str)] = &[("web", ":8000"), ("websecure", ":8443")];

/// A named network listener.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryPoint {
    /// Listening address in `host:port` form. Not validated until ports
    /// are extracted.
    pub address: String,
}

impl EntryPoint {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Global {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_new_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_anonymous_usage: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Api {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

/// Proxy log settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Log {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Log {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: Some(level.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffering_size: Option<i64>,
}

/// Static configuration of the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<Global>,
    #[serde(skip_serializing_if = "EntryPoints::is_empty")]
    pub entry_points: EntryPoints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Providers>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Api>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<Log>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_log: Option<AccessLog>,
}

impl Configuration {
    /// Kinds of the enabled providers.
    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.providers
            .as_ref()
            .map(Providers::kinds)
            .unwrap_or_default()
    }

    /// Reference configuration used to tell overridden settings apart.
    ///
    /// Holds no entry points and only the default form of each provider
    /// enabled in `self`.
    pub fn baseline(&self) -> Configuration {
        Configuration {
            providers: self.providers.as_ref().map(Providers::baseline),
            ..Configuration::default()
        }
    }
}

/// Ready-made configuration for `kind`: the `web` and `websecure` entry
/// points plus the provider in its default form (the file provider reads
/// the `conf` directory).
pub fn default_configuration(kind: ProviderKind) -> Configuration {
    let entry_points = DEFAULT_ENTRY_POINTS
        .iter()
        .map(|(name, address)| (name.to_string(), EntryPoint::new(*address)))
        .collect();

    let mut providers = Providers::with_default(kind);
    if kind == ProviderKind::File {
        providers.file = Some(FileProvider::with_directory(DEFAULT_FILE_DIRECTORY));
    }

    tracing::debug!(provider = %kind, "built default configuration");

    Configuration {
        entry_points,
        providers: Some(providers),
        ..Configuration::default()
    }
}
