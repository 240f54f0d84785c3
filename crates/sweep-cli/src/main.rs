//! edge-sweep - orphaned Lambda@Edge cleanup CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sweep_cli::cmd;
use sweep_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DeleteFns => cmd::delete_fns::delete_fns().await,
    }
}
