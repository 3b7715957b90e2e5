//! Heirloom storefront client
//!
//! Talks to the storefront REST API: reads the catalog, keeps a bearer-token
//! session for admin calls, and turns the shopping cart into an order.

pub mod auth;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod orders;
pub mod storage;
pub mod transport;
