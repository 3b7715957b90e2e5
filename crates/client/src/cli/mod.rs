use std::sync::Arc;

use clap::{Parser, Subcommand};
use heirloom_client::{
    config::ClientConfig,
    transport::{ReqwestTransport, Transport},
};

mod cart;
mod checkout;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "heirloom", about = "Heirloom storefront client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product, featured first
    Products,

    /// Show one product
    Product(products::ProductArgs),

    /// Inspect or change the cart
    Cart(cart::CartCommand),

    /// Submit the cart as an order
    Checkout(checkout::CheckoutArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let transport: Arc<dyn Transport> = Arc::new(
            ReqwestTransport::new(self.config.api_base_url.clone(), self.config.timeout())
                .map_err(|error| format!("failed to build http client: {error}"))?,
        );

        match self.command {
            Commands::Products => products::list(transport).await,
            Commands::Product(args) => products::show(args, transport).await,
            Commands::Cart(command) => cart::run(command, &self.config, transport).await,
            Commands::Checkout(args) => checkout::run(args, &self.config, transport).await,
        }
    }
}

fn write_error(error: std::io::Error) -> String {
    format!("failed to write output: {error}")
}
