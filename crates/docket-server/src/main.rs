//! Docket server binary
//!
//! Starts the HTTP service for document task extraction.

use anyhow::Context;
use clap::Parser;
use docket_server::{config::ServerConfig, start_server};
use std::path::PathBuf;

/// Document task extraction service
#[derive(Debug, Parser)]
#[command(name = "docket-server", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "DOCKET_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            eprintln!("Warning: No config file specified, using defaults");
            ServerConfig::default()
        }
    };

    if let Some(port) = cli.port {
        config.bind_port = port;
    }

    start_server(config).await?;

    Ok(())
}
