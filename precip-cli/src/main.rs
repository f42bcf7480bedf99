//! Binary crate for the `precip` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive forecast form
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod form;
mod output;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
