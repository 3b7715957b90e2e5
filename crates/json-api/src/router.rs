//! App Router

use salvo::Router;

use crate::{orders, products, storefront};

pub(crate) fn api_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("categories").get(storefront::categories::handler))
        .push(Router::with_path("branches").get(storefront::branches::handler))
        .push(
            Router::with_path("orders")
                .post(orders::create::handler)
                .push(Router::with_path("{order}").get(orders::get::handler)),
        )
}
