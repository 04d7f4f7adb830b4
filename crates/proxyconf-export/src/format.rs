//! Input and output format selection

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Formats a configuration can be rendered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Space separated command-line flags
    Cli,
    Toml,
    Yaml,
    /// Docker Compose file rendered from a template
    Docker,
    /// Kubernetes manifest rendered from a template
    Kubernetes,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Cli,
        OutputFormat::Toml,
        OutputFormat::Yaml,
        OutputFormat::Docker,
        OutputFormat::Kubernetes,
    ];

    /// Whether rendering needs a template file
    pub fn uses_template(&self) -> bool {
        matches!(self, Self::Docker | Self::Kubernetes)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cli" => Ok(Self::Cli),
            "toml" => Ok(Self::Toml),
            "yml" | "yaml" => Ok(Self::Yaml),
            "docker" => Ok(Self::Docker),
            "kubernetes" | "crd" | "k8s" => Ok(Self::Kubernetes),
            _ => Err(Error::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cli => "cli",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Docker => "docker",
            Self::Kubernetes => "kubernetes",
        };
        f.write_str(name)
    }
}

/// Formats a configuration can be imported from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputFormat {
    Toml,
    #[default]
    Yaml,
}

impl InputFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect format from a file path, if its extension is known
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get default file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Toml => &["toml"],
            Self::Yaml => &["yaml", "yml"],
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| Error::UnknownFormat {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}
