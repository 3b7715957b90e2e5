//! Products

pub mod errors;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
