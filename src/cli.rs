//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// visit-badge - per-key visit counters rendered as badges
#[derive(Parser)]
#[command(name = "visit-badge")]
#[command(version)]
#[command(about = "Per-key visit counters rendered as SVG and JSON badges", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print current counters as JSON without incrementing them
    Get {
        /// Keys to look up
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
