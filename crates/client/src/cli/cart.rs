use std::{io, sync::Arc};

use clap::{Args, Subcommand};
use heirloom::{cart::store::CartCommand as Command, products::ProductUuid};
use heirloom_client::{
    catalog::CatalogClient,
    config::ClientConfig,
    storage::{CartStorage, FileCartStorage, open_store},
    transport::Transport,
};

use super::{render, write_error};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart and its total
    Show,

    /// Add a product, merging with an existing line
    Add {
        /// Product id
        product: ProductUuid,

        /// Units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a product
    Remove {
        /// Product id
        product: ProductUuid,
    },

    /// Replace a product's quantity; 0 removes it
    Set {
        /// Product id
        product: ProductUuid,

        /// New quantity
        quantity: u32,
    },

    /// Empty the cart
    Clear,
}

pub(crate) async fn run(
    command: CartCommand,
    config: &ClientConfig,
    transport: Arc<dyn Transport>,
) -> Result<(), String> {
    let storage: Arc<dyn CartStorage> = Arc::new(FileCartStorage::new(config.cart_path.clone()));

    let (mut store, _persisted) =
        open_store(storage).map_err(|error| format!("failed to load cart: {error}"))?;

    let command = match command.command {
        CartSubcommand::Show => {
            return render::cart(io::stdout().lock(), store.cart()).map_err(write_error);
        }
        CartSubcommand::Add { product, quantity } => {
            let product = CatalogClient::new(transport)
                .get_product(product)
                .await
                .map_err(|error| format!("failed to load product: {error}"))?;

            Command::Add { product, quantity }
        }
        CartSubcommand::Remove { product } => Command::Remove(product),
        CartSubcommand::Set { product, quantity } => Command::SetQuantity { product, quantity },
        CartSubcommand::Clear => Command::Clear,
    };

    let _previous = store
        .apply(command)
        .map_err(|error| format!("cart not updated: {error}"))?;

    render::cart(io::stdout().lock(), store.cart()).map_err(write_error)
}
