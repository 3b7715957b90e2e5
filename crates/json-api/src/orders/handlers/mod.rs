//! Order Handlers

pub(crate) mod create;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use heirloom::orders::{Order, OrderItem};

/// Order line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct OrderItemPayload {
    /// Product identifier
    pub product_id: Uuid,

    /// Number of units, at least one
    pub quantity: u32,
}

impl From<OrderItemPayload> for OrderItem {
    fn from(item: OrderItemPayload) -> Self {
        OrderItem {
            product_id: item.product_id.into(),
            quantity: item.quantity,
        }
    }
}

impl From<OrderItem> for OrderItemPayload {
    fn from(item: OrderItem) -> Self {
        OrderItemPayload {
            product_id: item.product_id.into(),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub id: Uuid,

    /// Customer full name
    pub customer_name: String,

    /// Customer email
    pub customer_email: String,

    /// Shipping address
    pub address: String,

    /// Ordered products
    pub items: Vec<OrderItemPayload>,

    /// Order total in pence/cents
    pub total: u64,

    /// The date and time the order was accepted
    pub created_at: String,

    /// Order status: pending, paid, shipped or cancelled
    pub status: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.into(),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            address: order.address,
            items: order.items.into_iter().map(Into::into).collect(),
            total: order.total,
            created_at: order.created_at.to_string(),
            status: order.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use heirloom::{
        orders::{Order, OrderItem, OrderRequest},
        products::ProductUuid,
    };
    use jiff::Timestamp;

    pub(super) fn make_request(items: Vec<(ProductUuid, u32)>, total: u64) -> OrderRequest {
        OrderRequest {
            customer_name: "Ada Lovelace".to_string(),
            customer_email: "ada@example.com".to_string(),
            address: "12 St James's Square, London".to_string(),
            items: items
                .into_iter()
                .map(|(product_id, quantity)| OrderItem {
                    product_id,
                    quantity,
                })
                .collect(),
            total,
        }
    }

    pub(super) fn make_order(request: OrderRequest) -> Order {
        Order::accept(request, Timestamp::UNIX_EPOCH)
    }
}
