//! Command implementations for proxyconf-cli

pub mod default;
pub mod export;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use proxyconf_config::Configuration;
use proxyconf_export::{OutputFormat, Templates};

use crate::error::{CliError, Result};

pub use default::run_default;
pub use export::run_export;

/// Render `conf` as `format` into `output`, or standard output when `None`.
pub(crate) fn write_configuration(
    conf: &Configuration,
    format: OutputFormat,
    templates: &Templates,
    output: Option<&Path>,
) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    proxyconf_export::export(conf, format, templates, &mut writer)
        .map_err(|source| CliError::Export { format, source })?;
    writer.flush()?;
    Ok(())
}
