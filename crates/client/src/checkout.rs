//! Checkout: submit the cart once and clear it on success.

use std::sync::atomic::{AtomicBool, Ordering};

use heirloom::{
    cart::store::{CartCommand, CartStore},
    orders::{CustomerInfo, Order},
};
use tracing::debug;

use crate::orders::{OrdersClient, SubmitError};

/// Places orders, one at a time.
#[derive(Debug)]
pub struct Checkout {
    orders: OrdersClient,
    in_flight: AtomicBool,
}

/// Marks a submission as in flight until dropped.
#[derive(Debug)]
pub(crate) struct SubmissionGuard<'a> {
    in_flight: &'a AtomicBool,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

impl Checkout {
    /// Create a checkout posting through `orders`.
    #[must_use]
    pub fn new(orders: OrdersClient) -> Self {
        Self {
            orders,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether a submission is waiting on the server.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub(crate) fn begin(&self) -> Result<SubmissionGuard<'_>, SubmitError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_already| SubmitError::SubmissionInProgress)?;

        Ok(SubmissionGuard {
            in_flight: &self.in_flight,
        })
    }

    /// Submit the store's cart as an order.
    ///
    /// The store is cleared only once the server has accepted the order; on
    /// any failure it is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::SubmissionInProgress`] while another call is
    /// pending, otherwise whatever [`OrdersClient::submit`] returns.
    pub async fn place_order(
        &self,
        store: &mut CartStore,
        customer: CustomerInfo,
    ) -> Result<Order, SubmitError> {
        let _guard = self.begin()?;

        let order = self.orders.submit(store.cart(), customer).await?;

        let _previous = store.apply(CartCommand::Clear)?;

        debug!(order = %order.id, "cart cleared after checkout");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        orders::tests::{accept, checkout_cart, connection_lost, customer},
        transport::{ApiResponse, MockTransport},
    };

    use super::*;

    fn checkout(transport: MockTransport) -> Checkout {
        Checkout::new(OrdersClient::new(Arc::new(transport)))
    }

    #[tokio::test]
    async fn successful_order_clears_store() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .returning(|request| Ok(accept(&request)));

        let checkout = checkout(transport);
        let mut store = CartStore::new(checkout_cart()?);

        let order = checkout
            .place_order(&mut store, customer("12 St James's Square, London"))
            .await?;

        assert_eq!(order.total, 69_000);
        assert!(store.cart().is_empty());
        assert!(!checkout.is_submitting());

        Ok(())
    }

    #[tokio::test]
    async fn rejected_order_keeps_cart() -> TestResult {
        let mut transport = MockTransport::new();

        transport.expect_send().once().return_once(|_| {
            Ok(ApiResponse::json(
                400,
                &json!({ "message": "address required", "field": "address" }),
            ))
        });

        let checkout = checkout(transport);
        let mut store = CartStore::new(checkout_cart()?);

        let result = checkout.place_order(&mut store, customer("x")).await;

        assert!(
            matches!(result, Err(SubmitError::Rejected(_))),
            "expected rejection, got {result:?}"
        );
        assert_eq!(store.total(), 69_000);
        assert!(!checkout.is_submitting(), "guard released after failure");

        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_keeps_cart() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .return_once(|_| Err(connection_lost()));

        let checkout = checkout(transport);
        let mut store = CartStore::new(checkout_cart()?);

        let result = checkout
            .place_order(&mut store, customer("12 St James's Square, London"))
            .await;

        assert!(
            matches!(result, Err(SubmitError::Transport(_))),
            "expected transport failure, got {result:?}"
        );
        assert_eq!(store.total(), 69_000);
        assert_eq!(store.cart().len(), 2);
        assert!(!checkout.is_submitting(), "guard released after failure");

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_checkout_fails_fast() -> TestResult {
        let mut transport = MockTransport::new();

        transport.expect_send().never();

        let checkout = checkout(transport);
        let mut store = CartStore::new(checkout_cart()?);

        let _pending = checkout.begin()?;

        let result = checkout
            .place_order(&mut store, customer("12 St James's Square, London"))
            .await;

        assert!(
            matches!(result, Err(SubmitError::SubmissionInProgress)),
            "expected in-progress error, got {result:?}"
        );
        assert_eq!(store.cart().len(), 2);

        Ok(())
    }
}
