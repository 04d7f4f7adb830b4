//! Renderers turning a configuration into its external representations

use std::io::Write;
use std::path::Path;

use proxyconf_config::Configuration;

use crate::error::{Error, Result};
use crate::format::OutputFormat;
use crate::labels::extract_labels;
use crate::template::{self, TemplateView, Templates};

/// Export the full configuration as a TOML document.
pub fn export_toml<W: Write>(conf: &Configuration, mut output: W) -> Result<()> {
    let document = toml::to_string(conf).map_err(|e| Error::encode("TOML", e))?;
    output.write_all(document.as_bytes())?;
    Ok(())
}

/// Export the full configuration as a YAML document.
pub fn export_yaml<W: Write>(conf: &Configuration, mut output: W) -> Result<()> {
    let document = serde_yaml::to_string(conf).map_err(|e| Error::encode("YAML", e))?;
    output.write_all(document.as_bytes())?;
    Ok(())
}

/// Export the overridden settings as command-line flags on a single line.
pub fn export_cli<W: Write>(conf: &Configuration, mut output: W) -> Result<()> {
    let mut labels = extract_labels(conf, "--")?;
    labels.sort();

    writeln!(output, "{}", labels.join(" "))?;
    Ok(())
}

/// Render the template at `template_path` with the labels and ports of `conf`.
pub fn export_with_template<W: Write>(
    conf: &Configuration,
    template_path: &Path,
    output: W,
) -> Result<()> {
    let view = TemplateView::from_configuration(conf)?;
    template::render(template_path, &view, output)
}

/// Export to a Docker Compose file.
pub fn export_docker<W: Write>(conf: &Configuration, template_path: &Path, output: W) -> Result<()> {
    export_with_template(conf, template_path, output)
}

/// Export to a Kubernetes manifest.
pub fn export_kubernetes<W: Write>(
    conf: &Configuration,
    template_path: &Path,
    output: W,
) -> Result<()> {
    export_with_template(conf, template_path, output)
}

/// Export `conf` in `format`, reading templates from `templates` when needed.
pub fn export<W: Write>(
    conf: &Configuration,
    format: OutputFormat,
    templates: &Templates,
    output: W,
) -> Result<()> {
    tracing::debug!(%format, "exporting configuration");
    match format {
        OutputFormat::Cli => export_cli(conf, output),
        OutputFormat::Toml => export_toml(conf, output),
        OutputFormat::Yaml => export_yaml(conf, output),
        OutputFormat::Docker => export_docker(conf, &templates.docker_compose(), output),
        OutputFormat::Kubernetes => export_kubernetes(conf, &templates.kubernetes(), output),
    }
}
