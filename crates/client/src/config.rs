//! Client configuration.

use std::{path::PathBuf, time::Duration};

use clap::Args;

/// Where the API lives and where the cart is kept.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Storefront API base URL
    #[arg(long, env = "API_BASE_URL", default_value = "http://localhost:8000")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "API_TIMEOUT_SECONDS", default_value_t = 30)]
    pub api_timeout_seconds: u64,

    /// File the cart is persisted to
    #[arg(long, env = "CART_PATH", default_value = "cart.json")]
    pub cart_path: PathBuf,
}

impl ClientConfig {
    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api_timeout_seconds)
    }
}
