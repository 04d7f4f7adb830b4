//! Provider definitions
//!
//! A provider is the source the proxy watches for dynamic routing
//! configuration. Only the static settings of each provider live here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kinds of provider a configuration can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderKind {
    /// Dynamic configuration read from files on disk.
    File,
    /// Container labels discovered through the Docker daemon.
    Docker,
    /// Kubernetes custom resources (IngressRoute and friends).
    KubernetesCrd,
}

impl ProviderKind {
    /// All provider kinds, in declaration order.
    pub const ALL: &'static [ProviderKind] = &[
        ProviderKind::File,
        ProviderKind::Docker,
        ProviderKind::KubernetesCrd,
    ];

    /// Label emitted for this provider regardless of its settings.
    ///
    /// The file provider has no marker: it is only enabled through its
    /// `directory` or `filename` settings.
    pub fn marker_label(&self) -> Option<&'static str> {
        match self {
            ProviderKind::File => None,
            ProviderKind::Docker => Some("providers.docker"),
            ProviderKind::KubernetesCrd => Some("providers.kubernetescrd"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(ProviderKind::File),
            "docker" => Ok(ProviderKind::Docker),
            "kubernetes" | "kubernetescrd" | "crd" | "k8s" => Ok(ProviderKind::KubernetesCrd),
            _ => Err(Error::UnknownProvider {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::File => write!(f, "file"),
            ProviderKind::Docker => write!(f, "docker"),
            ProviderKind::KubernetesCrd => write!(f, "kubernetescrd"),
        }
    }
}

/// File provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileProvider {
    /// Directory holding the dynamic configuration files
    #[serde(skip_serializing_if = "String::is_empty")]
    pub directory: String,
    /// Single dynamic configuration file
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filename: String,
    /// Watch the files for changes
    pub watch: bool,
    pub debug_log_generated_template: bool,
}

impl FileProvider {
    /// File provider reading every file of `directory`.
    pub fn with_directory(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }
}

impl Default for FileProvider {
    fn default() -> Self {
        Self {
            directory: String::new(),
            filename: String::new(),
            watch: true,
            debug_log_generated_template: false,
        }
    }
}

/// TLS settings used to reach the Docker daemon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientTls {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ca: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cert: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub insecure_skip_verify: bool,
}

pub const DEFAULT_DOCKER_ENDPOINT: &str = "unix:///var/run/docker.sock";
pub const DEFAULT_DOCKER_RULE: &str = "Host(`{{ normalize .Name }}`)";

/// Docker provider settings.
///
/// `Default` yields the values the proxy applies when the provider is
/// enabled without any option, so an enabled-but-untouched provider
/// produces no override labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DockerProvider {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub constraints: String,
    pub watch: bool,
    pub endpoint: String,
    pub default_rule: String,
    pub exposed_by_default: bool,
    #[serde(rename = "useBindPortIP")]
    pub use_bind_port_ip: bool,
    pub swarm_mode: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network: String,
    pub swarm_mode_refresh_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ClientTls>,
}

impl Default for DockerProvider {
    fn default() -> Self {
        Self {
            constraints: String::new(),
            watch: true,
            endpoint: DEFAULT_DOCKER_ENDPOINT.to_string(),
            default_rule: DEFAULT_DOCKER_RULE.to_string(),
            exposed_by_default: true,
            use_bind_port_ip: false,
            swarm_mode: false,
            network: String::new(),
            swarm_mode_refresh_seconds: 15,
            tls: None,
        }
    }
}

/// Kubernetes CRD provider settings. Every field is unset by default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KubernetesCrdProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_auth_file_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_cross_namespace: Option<bool>,
}

/// The `providers` section of a static configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Providers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerProvider>,
    #[serde(rename = "kubernetesCRD", skip_serializing_if = "Option::is_none")]
    pub kubernetes_crd: Option<KubernetesCrdProvider>,
}

impl Providers {
    /// Providers section enabling only the default form of `kind`.
    pub fn with_default(kind: ProviderKind) -> Self {
        let mut providers = Self::default();
        providers.enable_default(kind);
        providers
    }

    /// Kinds of every enabled provider, in declaration order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    /// First enabled provider, if any.
    pub fn kind(&self) -> Option<ProviderKind> {
        self.kinds().into_iter().next()
    }

    pub fn has(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::File => self.file.is_some(),
            ProviderKind::Docker => self.docker.is_some(),
            ProviderKind::KubernetesCrd => self.kubernetes_crd.is_some(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }

    /// Same set of providers as `self`, each in its default form.
    pub fn baseline(&self) -> Self {
        let mut baseline = Self::default();
        for kind in self.kinds() {
            baseline.enable_default(kind);
        }
        baseline
    }

    fn enable_default(&mut self, kind: ProviderKind) {
        match kind {
            ProviderKind::File => self.file = Some(FileProvider::default()),
            ProviderKind::Docker => self.docker = Some(DockerProvider::default()),
            ProviderKind::KubernetesCrd => {
                self.kubernetes_crd = Some(KubernetesCrdProvider::default())
            }
        }
    }
}
