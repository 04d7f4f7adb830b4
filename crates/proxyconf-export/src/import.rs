//! Importers reading a configuration back from TOML or YAML documents

use std::io::Read;

use proxyconf_config::Configuration;

use crate::error::{Error, Result};
use crate::format::InputFormat;

fn read_source<R: Read>(mut input: R) -> Result<String> {
    let mut source = String::new();
    input.read_to_string(&mut source)?;
    Ok(source)
}

/// Import a TOML static configuration.
pub fn import_toml<R: Read>(input: R) -> Result<Configuration> {
    let source = read_source(input)?;
    toml::from_str(&source).map_err(|e| Error::decode("TOML", e))
}

/// Import a YAML static configuration. An empty document is the empty
/// configuration.
pub fn import_yaml<R: Read>(input: R) -> Result<Configuration> {
    let source = read_source(input)?;
    if source.trim().is_empty() {
        return Ok(Configuration::default());
    }
    serde_yaml::from_str(&source).map_err(|e| Error::decode("YAML", e))
}

/// Import a configuration written in `format`.
pub fn import<R: Read>(input: R, format: InputFormat) -> Result<Configuration> {
    tracing::debug!(%format, "importing configuration");
    match format {
        InputFormat::Toml => import_toml(input),
        InputFormat::Yaml => import_yaml(input),
    }
}
