//! Default command implementation

use std::path::Path;

use proxyconf_config::{ProviderKind, default_configuration};
use proxyconf_export::{OutputFormat, Templates};

use super::write_configuration;
use crate::error::Result;

/// Write the default configuration of `provider` as `to`.
pub fn run_default(
    provider: &str,
    to: &str,
    output: Option<&Path>,
    templates: &Templates,
) -> Result<()> {
    let kind: ProviderKind = provider.parse()?;
    let format: OutputFormat = to.parse()?;

    write_configuration(&default_configuration(kind), format, templates, output)
}
