//! Orders service errors.

use heirloom::orders::{OrderUuid, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order {0} not found")]
    NotFound(OrderUuid),

    #[error("invalid order: {0}")]
    Invalid(#[from] ValidationError),
}
