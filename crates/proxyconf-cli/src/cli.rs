//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// proxyconf - Convert reverse proxy static configurations
///
/// Run without a command for an interactive export of a default
/// configuration.
#[derive(Parser, Debug)]
#[command(name = "proxyconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the Docker Compose and Kubernetes templates
    #[arg(
        long,
        global = true,
        env = "PROXYCONF_TEMPLATES",
        default_value = "templates"
    )]
    pub templates: PathBuf,

    /// Directory the interactive mode writes its files to
    #[arg(long, global = true, env = "PROXYCONF_OUT_DIR", default_value = "out")]
    pub out_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Convert a static configuration file to another format
    ///
    /// Examples:
    ///   proxyconf export traefik.yml               # CLI flags
    ///   proxyconf export traefik.yml -t toml       # TOML document
    ///   proxyconf export traefik.toml -t docker    # Docker Compose file
    Export {
        /// Static configuration file (TOML or YAML)
        source: PathBuf,

        /// Output format (cli, toml, yml, yaml, docker, kubernetes, crd, k8s)
        #[arg(short = 't', long, default_value = "cli")]
        to: String,

        /// Source format (toml, yml, yaml); detected from the extension if omitted
        #[arg(long)]
        from: Option<String>,

        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default configuration of a provider
    ///
    /// Examples:
    ///   proxyconf default docker -t docker   # Docker Compose file
    ///   proxyconf default file               # TOML document
    Default {
        /// Provider (file, docker, kubernetes)
        provider: String,

        /// Output format (cli, toml, yml, yaml, docker, kubernetes, crd, k8s)
        #[arg(short = 't', long, default_value = "toml")]
        to: String,

        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
