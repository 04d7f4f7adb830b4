//! proxyconf CLI
//!
//! Converts reverse proxy static configurations between TOML, YAML,
//! command-line flags and deployment templates.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use proxyconf_export::Templates;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second subscriber is ignored
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    let templates = Templates::new(&cli.templates);

    match cli.command {
        Some(cmd) => execute_command(cmd, &templates),
        None => {
            // Interactive failures end the session without a failing exit code
            if let Err(e) = interactive::run_interactive(&templates, &cli.out_dir) {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, templates: &Templates) -> Result<()> {
    match cmd {
        Commands::Export {
            source,
            to,
            from,
            output,
        } => commands::run_export(
            &source,
            &to,
            from.as_deref(),
            output.as_deref(),
            templates,
        ),
        Commands::Default {
            provider,
            to,
            output,
        } => commands::run_default(&provider, &to, output.as_deref(), templates),
    }
}
