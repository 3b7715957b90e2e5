//! Order submission.

use std::{fmt, sync::Arc};

use heirloom::{
    cart::{Cart, CartError},
    orders::{CustomerInfo, Order, OrderRequest, ValidationError},
};
use thiserror::Error;
use tracing::{info, warn};

use crate::transport::{ApiRequest, Transport, TransportError};

/// Errors returned while submitting an order.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected locally, nothing was sent
    #[error("{0}")]
    Invalid(ValidationError),

    /// Rejected by the server with a `{message, field}` body
    #[error("{0}")]
    Rejected(ValidationError),

    /// The request never got a response
    #[error("order submission failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a status other than 201 or 400
    #[error("order submission failed with status {0}")]
    Status(u16),

    /// The server answered with a body of the wrong shape
    #[error("order submission failed: unexpected response")]
    UnexpectedResponse,

    /// Another checkout is already waiting on the server
    #[error("an order is already being submitted")]
    SubmissionInProgress,

    /// The cart couldn't be cleared after the order was accepted
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl SubmitError {
    /// The validation failure behind a local or server-side rejection.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            SubmitError::Invalid(error) | SubmitError::Rejected(error) => Some(error),
            _ => None,
        }
    }
}

/// Posts finalized carts as orders.
#[derive(Clone)]
pub struct OrdersClient {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for OrdersClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrdersClient").finish_non_exhaustive()
    }
}

impl OrdersClient {
    /// Create a client over `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build an order from `cart`, validate it and post it once.
    ///
    /// The caller is responsible for clearing the cart once this succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without any network call when the
    /// request fails local validation, [`SubmitError::Rejected`] with the
    /// server's message on 400, and a generic failure otherwise.
    pub async fn submit(&self, cart: &Cart, customer: CustomerInfo) -> Result<Order, SubmitError> {
        let request = OrderRequest::from_cart(cart, customer);

        request.validate().map_err(SubmitError::Invalid)?;

        let response = self
            .transport
            .send(ApiRequest::post("/api/orders/", &request)?)
            .await?;

        match response.status {
            201 => {
                let order: Order = response.parse().map_err(|error| {
                    warn!("order response did not match schema: {error}");

                    SubmitError::UnexpectedResponse
                })?;

                info!(order = %order.id, total = order.total, "order submitted");

                Ok(order)
            }
            400 => {
                let rejection: ValidationError = response.parse().map_err(|error| {
                    warn!("order rejection did not match schema: {error}");

                    SubmitError::UnexpectedResponse
                })?;

                Err(SubmitError::Rejected(rejection))
            }
            status => {
                warn!(status, "order submission failed");

                Err(SubmitError::Status(status))
            }
        }
    }
}
