//! Orders Repository

use heirloom::orders::{Order, OrderUuid};
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub(crate) struct MemoryOrdersRepository {
    orders: RwLock<FxHashMap<OrderUuid, Order>>,
}

impl MemoryOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn insert_order(&self, order: Order) -> Order {
        self.orders.write().await.insert(order.id, order.clone());

        order
    }

    pub(crate) async fn get_order(&self, order: OrderUuid) -> Option<Order> {
        self.orders.read().await.get(&order).cloned()
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> usize {
        self.orders.read().await.len()
    }
}
