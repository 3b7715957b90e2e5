use std::{io, sync::Arc};

use clap::Args;
use heirloom::orders::CustomerInfo;
use heirloom_client::{
    checkout::Checkout,
    config::ClientConfig,
    orders::OrdersClient,
    storage::{CartStorage, FileCartStorage, open_store},
    transport::Transport,
};

use super::{render, write_error};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Customer full name
    #[arg(long)]
    name: String,

    /// Customer email
    #[arg(long)]
    email: String,

    /// Shipping address
    #[arg(long)]
    address: String,
}

pub(crate) async fn run(
    args: CheckoutArgs,
    config: &ClientConfig,
    transport: Arc<dyn Transport>,
) -> Result<(), String> {
    let storage: Arc<dyn CartStorage> = Arc::new(FileCartStorage::new(config.cart_path.clone()));

    let (mut store, _persisted) =
        open_store(storage).map_err(|error| format!("failed to load cart: {error}"))?;

    let checkout = Checkout::new(OrdersClient::new(transport));

    let customer = CustomerInfo {
        name: args.name,
        email: args.email,
        address: args.address,
    };

    let order = checkout
        .place_order(&mut store, customer)
        .await
        .map_err(|error| match error.validation() {
            Some(rejection) => format!("order rejected: {} ({})", rejection.message, rejection.field),
            None => error.to_string(),
        })?;

    render::order(io::stdout().lock(), &order).map_err(write_error)
}
