use std::{io, sync::Arc};

use clap::Args;
use heirloom::products::ProductUuid;
use heirloom_client::{catalog::CatalogClient, transport::Transport};

use super::{render, write_error};

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    id: ProductUuid,
}

pub(crate) async fn list(transport: Arc<dyn Transport>) -> Result<(), String> {
    let products = CatalogClient::new(transport)
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        return render::line(io::stdout().lock(), "no products found").map_err(write_error);
    }

    render::products(io::stdout().lock(), &products).map_err(write_error)
}

pub(crate) async fn show(args: ProductArgs, transport: Arc<dyn Transport>) -> Result<(), String> {
    let product = CatalogClient::new(transport)
        .get_product(args.id)
        .await
        .map_err(|error| format!("failed to load product: {error}"))?;

    render::product(io::stdout().lock(), &product).map_err(write_error)
}
