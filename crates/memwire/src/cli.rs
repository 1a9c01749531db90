//! Command line interface
//!
//! Commands return their report as a `String` so the binary only prints.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use memwire_application::ports::registry::list_client_drivers;
use memwire_domain::ports::ClientRuntime;
use memwire_infrastructure::config::{AppConfig, ConfigLoader};
use memwire_infrastructure::di::{DefinitionCompiler, resolve_runtime, wire_container};
use memwire_infrastructure::logging::init_logging;
use tracing::info;

/// Command line interface for memwire
#[derive(Parser, Debug)]
#[command(name = "memwire")]
#[command(about = "Wire memcached client instances into a service container")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate, wire and compile every configured instance
    Check,
    /// Print the wired service definitions as JSON
    Dump,
    /// List registered client drivers
    Drivers,
}

/// Run one CLI invocation, printing its report to stdout
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Drivers => drivers(),
        Command::Check => {
            let config = load_config(cli)?;
            init_logging(&config.logging).context("Failed to initialize logging")?;
            check(&config)?
        }
        Command::Dump => dump(&load_config(cli)?)?,
    };
    println!("{output}");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Wire and compile the configuration, summarizing the result
pub fn check(config: &AppConfig) -> anyhow::Result<String> {
    let runtime = resolve_runtime(&config.driver)?;
    let (container, report) = wire_container(config, runtime.clone())
        .context("Cache instance configuration is invalid")?;
    let instances = DefinitionCompiler::new(runtime.clone())
        .compile(&container)
        .context("Failed to construct cache clients")?;

    info!(
        driver = runtime.name(),
        instances = instances.len(),
        "Configuration check passed"
    );

    let mut lines = vec![
        format!("driver: {}", runtime.name()),
        format!("instances: {}", instances.len()),
    ];
    lines.extend(report.services.iter().map(|service_id| format!("  {service_id}")));
    lines.push(match &report.session_instance {
        Some(instance) => format!("session: {instance}"),
        None => "session: disabled".to_string(),
    });
    Ok(lines.join("\n"))
}

/// Wired service definitions as pretty JSON
pub fn dump(config: &AppConfig) -> anyhow::Result<String> {
    let runtime = resolve_runtime(&config.driver)?;
    let (container, _) = wire_container(config, runtime)
        .context("Cache instance configuration is invalid")?;
    Ok(container.to_json()?)
}

/// Registered drivers, one per line
pub fn drivers() -> String {
    list_client_drivers()
        .into_iter()
        .map(|(name, description)| format!("{name:<8} {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}
