//! Heirloom Application CLI

use std::{path::PathBuf, process};

use clap::{Args, Parser, Subcommand};
use heirloom_app::catalog::Catalog;

#[derive(Debug, Parser)]
#[command(name = "heirloom-app", about = "Heirloom CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(CatalogCommand),
}

#[derive(Debug, Args)]
struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Check a catalog seed file loads cleanly
    Check(CheckCatalogArgs),
}

#[derive(Debug, Args)]
struct CheckCatalogArgs {
    /// Catalog seed file (YAML)
    #[arg(long, env = "CATALOG_PATH")]
    file: PathBuf,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        #[expect(clippy::print_stderr, reason = "CLI error output")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Catalog(CatalogCommand {
            command: CatalogSubcommand::Check(args),
        }) => check_catalog(args).await,
    }
}

async fn check_catalog(args: CheckCatalogArgs) -> Result<(), String> {
    let catalog = Catalog::load(&args.file)
        .await
        .map_err(|error| format!("catalog {} is invalid: {error}", args.file.display()))?;

    let products = catalog.products();
    let featured = products.iter().filter(|product| product.featured).count();

    #[expect(clippy::print_stdout, reason = "CLI report output")]
    {
        println!("products: {} ({featured} featured)", products.len());
        println!("categories: {}", catalog.categories().len());
        println!("branches: {}", catalog.branches().len());
    }

    Ok(())
}
