//! Template rendering for the Docker Compose and Kubernetes outputs
//!
//! Templates are Jinja files read from disk. They receive a
//! [`TemplateView`] with two sequences:
//!
//! | Variable             | Content                                        |
//! |----------------------|------------------------------------------------|
//! | `labels`             | sorted labels, without prefix                  |
//! | `ports`              | `{ name, port }` per entry point, sorted by name |
//!
//! Undefined variables are errors, so a template referring to a field the
//! view does not have fails instead of rendering an empty string.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use proxyconf_config::Configuration;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::labels::extract_labels;
use crate::ports::{PortMapping, extract_ports};

/// File name of the Docker Compose template
pub const DOCKER_COMPOSE_TEMPLATE: &str = "docker-compose-tpl.yml";
/// File name of the Kubernetes load balancer template
pub const KUBERNETES_TEMPLATE: &str = "traefik-lb-svc-tpl.yml";

/// Values available to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateView {
    pub labels: Vec<String>,
    pub ports: Vec<PortMapping>,
}

impl TemplateView {
    pub fn from_configuration(conf: &Configuration) -> Result<Self> {
        Ok(Self {
            labels: extract_labels(conf, "")?,
            ports: extract_ports(&conf.entry_points)?,
        })
    }
}

/// Directory holding the template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn docker_compose(&self) -> PathBuf {
        self.dir.join(DOCKER_COMPOSE_TEMPLATE)
    }

    pub fn kubernetes(&self) -> PathBuf {
        self.dir.join(KUBERNETES_TEMPLATE)
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

/// Render the template at `path` with `view` into `output`.
pub fn render<W: Write>(path: &Path, view: &TemplateView, output: W) -> Result<()> {
    let source = fs::read_to_string(path).map_err(|source| Error::TemplateNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("template");

    tracing::debug!(template = %path.display(), "rendering template");

    let template_error = |source: minijinja::Error| Error::Template {
        path: path.to_path_buf(),
        source,
    };
    let env = environment();
    let template = env
        .template_from_named_str(name, &source)
        .map_err(template_error)?;
    template.render_to_write(view, output).map_err(template_error)?;

    Ok(())
}
