//! Heirloom storefront CLI

use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(error) = cli.run().await {
        #[expect(clippy::print_stderr, reason = "CLI error output")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
