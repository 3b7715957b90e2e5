//! Orders service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use heirloom::{
    orders::{Order, OrderRequest, OrderUuid, ValidationError},
    pricing,
};
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::domain::{
    orders::{errors::OrdersServiceError, repository::MemoryOrdersRepository},
    products::{ProductsService, ProductsServiceError},
};

pub struct MemoryOrdersService {
    products: Arc<dyn ProductsService>,
    repository: MemoryOrdersRepository,
}

impl fmt::Debug for MemoryOrdersService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryOrdersService")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl MemoryOrdersService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self {
            products,
            repository: MemoryOrdersRepository::new(),
        }
    }

    /// Price every line from the catalog and return the authoritative total.
    async fn price(&self, request: &OrderRequest) -> Result<u64, OrdersServiceError> {
        let mut lines = Vec::with_capacity(request.items.len());

        for (index, item) in request.items.iter().enumerate() {
            let product = match self.products.get_product(item.product_id).await {
                Ok(product) => product,
                Err(ProductsServiceError::NotFound(_)) => {
                    return Err(ValidationError::new(
                        format!("items[{index}].productId"),
                        "unknown product",
                    )
                    .into());
                }
            };

            lines.push((product.price, item.quantity));
        }

        pricing::checked_total(lines).map_err(|error| {
            warn!("order total out of range: {error}");

            OrdersServiceError::Invalid(ValidationError::new("total", "order total is too large"))
        })
    }
}

#[async_trait]
impl OrdersService for MemoryOrdersService {
    async fn create_order(&self, request: OrderRequest) -> Result<Order, OrdersServiceError> {
        request.validate()?;

        let expected = self.price(&request).await?;

        if request.total != expected {
            warn!(
                submitted = request.total,
                expected, "rejecting order with stale or tampered total"
            );

            return Err(
                ValidationError::new("total", "total does not match current prices").into(),
            );
        }

        let order = self
            .repository
            .insert_order(Order::accept(request, Timestamp::now()))
            .await;

        info!(order = %order.id, total = order.total, items = order.items.len(), "order created");

        Ok(order)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        self.repository
            .get_order(order)
            .await
            .ok_or(OrdersServiceError::NotFound(order))
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Validate, price and store a new order.
    async fn create_order(&self, request: OrderRequest) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;
}
