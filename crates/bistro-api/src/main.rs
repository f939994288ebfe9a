#![forbid(unsafe_code)]

//! Bistro server entry point.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use bistro_api::{BistroConfig, Server};
use bistro_storage::MemoryStore;

/// Bistro menu server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "BISTRO_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides configuration)
    #[arg(short, long)]
    bind: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = BistroConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .init();

    tracing::info!(
        config = ?args.config,
        bind = %config.server.bind,
        tokens = config.auth.tokens.len(),
        "Starting Bistro"
    );

    let store = Arc::new(MemoryStore::new());
    Server::new(config, store).run().await?;
    Ok(())
}
