//! Heirloom server-side services
//!
//! Catalog seeding plus the products, storefront and orders services the JSON
//! API is built on. Everything is held in memory.

pub mod catalog;
pub mod context;
pub mod domain;

pub use domain::{orders, products, storefront};

#[cfg(test)]
mod test;
