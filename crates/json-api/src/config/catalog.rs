//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog seed settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Catalog seed file (YAML)
    #[arg(long, env = "CATALOG_PATH", default_value = "data/catalog.yaml")]
    pub catalog_path: PathBuf,
}
