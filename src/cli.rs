//! Command-line options for the server binary.

use std::path::PathBuf;

use clap::Parser;

/// Disease treatment quiz server
#[derive(Debug, Parser)]
#[command(name = "wardround", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind host (overrides configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides configuration)
    #[arg(long)]
    pub port: Option<u16>,
}
