//! Lumber - Command Line Entry Point
//!
//! Inspection tooling for a lumber installation.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lumber providers` | Discovered providers and the backend that would be selected |
//! | `lumber plugins` | Registered component plugins |
//! | `lumber check` | Build the declared components and report failures |
//! | `lumber config` | Print the effective configuration |

// Force-link lumber-providers to ensure linkme registrations are included
extern crate lumber_providers;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use lumber_application::plugins::PluginFactoryResolver;
use lumber_application::registry::list_plugins;
use lumber_infrastructure::components::build_components;
use lumber_infrastructure::config::{ConfigLoader, LumberConfig};
use lumber_infrastructure::logging::init_logging;
use lumber_infrastructure::selector::ContextFactorySelector;
use tracing::debug;

/// Command line interface for lumber
#[derive(Parser, Debug)]
#[command(name = "lumber")]
#[command(about = "Lumber - logging backend discovery and component checks")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Inspection commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List discovered providers and the backend that would be selected
    Providers,
    /// List registered component plugins
    Plugins,
    /// Build the declared components and report failures
    Check,
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_logging(&config.logging).context("Failed to initialize diagnostic logging")?;
    debug!(command = ?cli.command, "Running command");

    match cli.command {
        Command::Providers => providers(&config),
        Command::Plugins => {
            plugins();
            Ok(())
        }
        Command::Check => check(&config),
        Command::Config => {
            print!("{}", ConfigLoader::render(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<LumberConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load lumber configuration")
}

fn providers(config: &LumberConfig) -> anyhow::Result<()> {
    let selector = ContextFactorySelector::from_config(&config.manager);
    let candidates = selector.registry().discover();
    if candidates.is_empty() {
        println!("No providers discovered");
    }
    for descriptor in candidates.iter().rev() {
        println!(
            "{:>6}  {:<48} {} ({})",
            descriptor.priority, descriptor.class_name, descriptor.api_version, descriptor.source_id
        );
    }

    let selected = selector.select_from(&candidates);
    println!();
    println!(
        "Selected: {} ({})",
        selected.implementation_name(),
        selected.selection
    );
    Ok(())
}

fn plugins() {
    for (name, element_type, description) in list_plugins() {
        println!("{name:<16} {:<10} {description}", element_type.as_str());
    }
}

fn check(config: &LumberConfig) -> anyhow::Result<()> {
    let report = build_components(&PluginFactoryResolver::linked(), &config.components);

    let mut names: Vec<_> = report.appenders.keys().collect();
    names.sort();
    for name in names {
        println!("ok      appender {name}");
    }
    for failure in &report.failures {
        println!("failed  {}: {}", failure.declaration, failure.error);
    }

    if !report.is_clean() {
        bail!(
            "{} of {} declared components failed to build",
            report.failures.len(),
            config.components.len()
        );
    }
    println!(
        "{} components built, {} appenders",
        config.components.len(),
        report.appenders.len()
    );
    Ok(())
}
