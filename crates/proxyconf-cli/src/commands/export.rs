//! Export command implementation
//!
//! Reads a static configuration file and writes it in another format.

use std::fs::File;
use std::path::Path;

use proxyconf_export::{InputFormat, OutputFormat, Templates};

use super::write_configuration;
use crate::error::{CliError, Result};

/// Resolve the format of `source`: explicit `from`, then the file
/// extension, then YAML.
fn source_format(source: &Path, from: Option<&str>) -> Result<InputFormat> {
    match from {
        Some(name) => Ok(name.parse()?),
        None => Ok(InputFormat::from_path(source).unwrap_or_default()),
    }
}

/// Run the export command
pub fn run_export(
    source: &Path,
    to: &str,
    from: Option<&str>,
    output: Option<&Path>,
    templates: &Templates,
) -> Result<()> {
    let format: OutputFormat = to.parse()?;
    let input_format = source_format(source, from)?;
    tracing::debug!(source = %source.display(), %input_format, %format, "exporting file");

    let file = File::open(source).map_err(|e| {
        CliError::user(format!("cannot open source file {}: {e}", source.display()))
    })?;
    let conf = proxyconf_export::import(file, input_format).map_err(|e| CliError::Import {
        path: source.to_path_buf(),
        source: e,
    })?;

    write_configuration(&conf, format, templates, output)
}
