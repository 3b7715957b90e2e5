//! Products service errors.

use heirloom::products::ProductUuid;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product {0} not found")]
    NotFound(ProductUuid),
}
