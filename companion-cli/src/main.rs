//! Binary crate for the `companion` host adapter.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive credential configuration
//! - Desktop implementations of the host collaborator traits

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod host;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
