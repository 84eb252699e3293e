//! CLI mode
//!
//! One-shot commands that do not start the HTTP server.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::render::render_stats_batch;
use crate::runtime::lifetime;

const DEFAULT_SAMPLE_PATH: &str = "config.example.toml";

/// Run a non-server command
pub async fn run_cli(command: Commands, config: &StaticConfig) -> Result<()> {
    match command {
        Commands::Serve => super::run_server(config).await,
        Commands::Get { keys } => print_counters(&keys, config).await,
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => generate_config(output_path.as_deref().unwrap_or(DEFAULT_SAMPLE_PATH), force),
    }
}

async fn print_counters(keys: &[String], config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config).await?;
    let counts = startup.counter.read_many(keys).await;
    println!("{}", render_stats_batch(&counts).body);
    Ok(())
}

pub fn generate_config(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        bail!("{} already exists, use --force to overwrite", path);
    }

    StaticConfig::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path))?;
    println!("Sample configuration written to {}", path);
    Ok(())
}
