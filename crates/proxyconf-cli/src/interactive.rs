//! Interactive export
//!
//! Uses dialoguer to pick a target, then writes the default configuration
//! of the matching provider in the target's format.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use dialoguer::Select;
use proxyconf_config::{ProviderKind, default_configuration};
use proxyconf_export::{OutputFormat, Templates};

use crate::error::{CliError, Result};

/// Export targets offered by the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    DockerCompose,
    Kubernetes,
    Toml,
    Yaml,
    Cli,
}

/// Prompt options, in display order. The first one is the default.
pub const TARGETS: &[Target] = &[
    Target::DockerCompose,
    Target::Kubernetes,
    Target::Toml,
    Target::Yaml,
    Target::Cli,
];

impl Target {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DockerCompose => "Docker Compose",
            Self::Kubernetes => "Kubernetes",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Cli => "CLI",
        }
    }

    /// Provider whose default configuration is exported
    pub fn provider(&self) -> ProviderKind {
        match self {
            Self::DockerCompose => ProviderKind::Docker,
            Self::Kubernetes => ProviderKind::KubernetesCrd,
            Self::Toml | Self::Yaml | Self::Cli => ProviderKind::File,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            Self::DockerCompose => OutputFormat::Docker,
            Self::Kubernetes => OutputFormat::Kubernetes,
            Self::Toml => OutputFormat::Toml,
            Self::Yaml => OutputFormat::Yaml,
            Self::Cli => OutputFormat::Cli,
        }
    }

    /// Output file name, `None` for standard output
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            Self::DockerCompose => Some("docker-compose.yml"),
            Self::Kubernetes => Some("traefik-lb-svc.yml"),
            Self::Toml => Some("traefik.toml"),
            Self::Yaml => Some("traefik.yaml"),
            Self::Cli => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ask the user to pick one of `options`.
pub fn select_target(options: &[Target], default: Target) -> Result<Target> {
    let default_idx = options.iter().position(|t| *t == default).unwrap_or(0);

    let idx = Select::new()
        .with_prompt("Export the default configuration to")
        .items(options)
        .default(default_idx)
        .interact()?;

    options
        .get(idx)
        .copied()
        .ok_or_else(|| CliError::user("No export target selected."))
}

/// Write the default configuration for `target`.
///
/// Returns the written file, or `None` when the target prints to standard
/// output.
pub fn export_target(target: Target, templates: &Templates, out_dir: &Path) -> Result<Option<PathBuf>> {
    let conf = default_configuration(target.provider());
    let format = target.format();
    tracing::debug!(%target, %format, "interactive export");

    let export = |output: &mut dyn Write| {
        proxyconf_export::export(&conf, format, templates, output)
            .map_err(|source| CliError::Export { format, source })
    };

    match target.file_name() {
        Some(name) => {
            fs::create_dir_all(out_dir)?;
            let path = out_dir.join(name);
            let mut writer = BufWriter::new(File::create(&path)?);
            export(&mut writer)?;
            writer.flush()?;
            Ok(Some(path))
        }
        None => {
            let mut stdout = io::stdout().lock();
            export(&mut stdout)?;
            stdout.flush()?;
            Ok(None)
        }
    }
}

/// Run the interactive session
pub fn run_interactive(templates: &Templates, out_dir: &Path) -> Result<()> {
    let target = select_target(TARGETS, Target::DockerCompose)?;

    if let Some(path) = export_target(target, templates, out_dir)? {
        println!(
            "{} Wrote {} configuration to {}",
            "OK".green().bold(),
            target.label().cyan(),
            path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn templates() -> Templates {
        Templates::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates"))
    }

    #[test]
    fn test_targets_order_and_default() {
        let labels: Vec<_> = TARGETS.iter().map(Target::label).collect();
        assert_eq!(labels, ["Docker Compose", "Kubernetes", "TOML", "YAML", "CLI"]);
        assert_eq!(TARGETS[0], Target::DockerCompose);
    }

    #[test]
    fn test_target_providers() {
        assert_eq!(Target::DockerCompose.provider(), ProviderKind::Docker);
        assert_eq!(Target::Kubernetes.provider(), ProviderKind::KubernetesCrd);
        for target in [Target::Toml, Target::Yaml, Target::Cli] {
            assert_eq!(target.provider(), ProviderKind::File);
        }
    }

    #[test]
    fn test_export_toml_target() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out");

        let path = export_target(Target::Toml, &templates(), &out_dir)
            .unwrap()
            .unwrap();

        assert_eq!(path, out_dir.join("traefik.toml"));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("[entryPoints.web]"));
        assert!(content.contains("directory = \"conf\""));
    }

    #[test]
    fn test_export_docker_compose_target() {
        let temp_dir = TempDir::new().unwrap();

        let path = export_target(Target::DockerCompose, &templates(), temp_dir.path())
            .unwrap()
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("--providers.docker"));
        assert!(content.contains("8000"));
    }

    #[test]
    fn test_export_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        let templates = Templates::new(temp_dir.path().join("nowhere"));

        let result = export_target(Target::Kubernetes, &templates, temp_dir.path());
        assert!(matches!(
            result,
            Err(CliError::Export {
                format: OutputFormat::Kubernetes,
                ..
            })
        ));
    }
}
