//! Conversion of proxy static configurations between representations.
//!
//! Label-based outputs (CLI flags, Docker Compose, Kubernetes) only carry
//! the settings that differ from the provider defaults; TOML and YAML
//! outputs carry the whole configuration and can be imported back.

pub mod error;
pub mod export;
pub mod format;
pub mod import;
pub mod labels;
pub mod ports;
pub mod template;

pub use error::{Error, Result};
pub use export::{
    export, export_cli, export_docker, export_kubernetes, export_toml, export_with_template,
    export_yaml,
};
pub use format::{InputFormat, OutputFormat};
pub use import::{import, import_toml, import_yaml};
pub use labels::{encode, extract_labels};
pub use ports::{PortMapping, extract_ports, split_host_port};
pub use template::{TemplateView, Templates};
