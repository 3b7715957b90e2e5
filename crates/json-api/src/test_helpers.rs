//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use heirloom_app::{
    context::AppContext,
    domain::{
        orders::MockOrdersService, products::MockProductsService,
        storefront::MockStorefrontService,
    },
};

use crate::state::State;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();

    products
}

fn strict_storefront_mock() -> MockStorefrontService {
    let mut storefront = MockStorefrontService::new();

    storefront.expect_list_categories().never();
    storefront.expect_list_branches().never();

    storefront
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();

    orders
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            storefront: Arc::new(strict_storefront_mock()),
            orders: Arc::new(strict_orders_mock()),
        },
        route,
    )
}

pub(crate) fn storefront_service(storefront: MockStorefrontService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            storefront: Arc::new(storefront),
            orders: Arc::new(strict_orders_mock()),
        },
        route,
    )
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            storefront: Arc::new(strict_storefront_mock()),
            orders: Arc::new(orders),
        },
        route,
    )
}
