//! Heirloom
//!
//! Shopping cart and order contract for the Heirloom vintage storefront.
//!
//! The cart lives client-side in a [`CartStore`](cart::store::CartStore); orders
//! are built from it with [`OrderRequest::from_cart`](orders::OrderRequest::from_cart)
//! and validated with the same rules on both sides of the wire.

pub mod cart;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod uuids;
