//! Orders
//!
//! The order contract shared by the storefront client and the API server.

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{cart::Cart, products::ProductUuid, uuids::TypedUuid};

mod validation;

pub use validation::ValidationError;

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Customer details entered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Shipping address
    pub address: String,
}

/// A product and quantity on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderItem {
    /// Ordered product
    pub product_id: ProductUuid,

    /// Units ordered
    pub quantity: u32,
}

/// Order as submitted by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderRequest {
    /// Customer full name
    pub customer_name: String,

    /// Customer email
    pub customer_email: String,

    /// Shipping address
    pub address: String,

    /// Ordered products
    pub items: Vec<OrderItem>,

    /// Total in minor units, as computed by the client
    pub total: u64,
}

impl OrderRequest {
    /// Build a request from the cart contents and the customer's details.
    pub fn from_cart(cart: &Cart, customer: CustomerInfo) -> Self {
        Self {
            customer_name: customer.name,
            customer_email: customer.email,
            address: customer.address,
            items: cart
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product().id,
                    quantity: line.quantity(),
                })
                .collect(),
            total: cart.total(),
        }
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting payment
    #[default]
    Pending,

    /// Payment received
    Paid,

    /// Handed to the courier
    Shipped,

    /// Cancelled before shipping
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        })
    }
}

/// An order accepted by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned identifier
    pub id: OrderUuid,

    /// Customer full name
    pub customer_name: String,

    /// Customer email
    pub customer_email: String,

    /// Shipping address
    pub address: String,

    /// Ordered products
    pub items: Vec<OrderItem>,

    /// Total in minor units
    pub total: u64,

    /// When the order was accepted
    pub created_at: Timestamp,

    /// Current status
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// Accept a request as a new pending order.
    pub fn accept(request: OrderRequest, created_at: Timestamp) -> Self {
        Self {
            id: OrderUuid::new(),
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            address: request.address,
            items: request.items,
            total: request.total,
            created_at,
            status: OrderStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::cart::tests::product;

    use super::*;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 St James's Square, London".to_string(),
        }
    }

    #[test]
    fn from_cart_copies_lines_and_total() -> TestResult {
        let coat = product("Coat", 45_000);
        let shirt = product("Shirt", 12_000);

        let mut cart = Cart::new();
        cart.add_item(coat.clone(), 1)?;
        cart.add_item(shirt.clone(), 2)?;

        let request = OrderRequest::from_cart(&cart, customer());

        assert_eq!(request.total, 69_000);
        assert_eq!(
            request.items,
            [
                OrderItem {
                    product_id: coat.id,
                    quantity: 1
                },
                OrderItem {
                    product_id: shirt.id,
                    quantity: 2
                },
            ]
        );
        assert_eq!(request.customer_name, "Ada Lovelace");

        Ok(())
    }

    #[test]
    fn request_serializes_camel_case() -> TestResult {
        let id = ProductUuid::new();

        let request = OrderRequest {
            customer_name: "Ada".to_string(),
            customer_email: "ada@example.com".to_string(),
            address: "London".to_string(),
            items: vec![OrderItem {
                product_id: id,
                quantity: 2,
            }],
            total: 100,
        };

        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "customerName": "Ada",
                "customerEmail": "ada@example.com",
                "address": "London",
                "items": [{ "productId": id, "quantity": 2 }],
                "total": 100,
            })
        );

        Ok(())
    }

    #[test]
    fn request_rejects_unknown_fields() {
        let result = serde_json::from_value::<OrderRequest>(json!({
            "customerName": "Ada",
            "customerEmail": "ada@example.com",
            "address": "London",
            "items": [],
            "total": 0,
            "discount": 100,
        }));

        assert!(result.is_err(), "unexpected fields must be rejected");
    }

    #[test]
    fn order_defaults_to_pending() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": OrderUuid::new(),
            "customerName": "Ada",
            "customerEmail": "ada@example.com",
            "address": "London",
            "items": [],
            "total": 0,
            "createdAt": "2026-02-21T12:00:00Z",
        }))?;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.status.to_string(), "pending");

        Ok(())
    }

    #[test]
    fn accept_assigns_pending_status_and_time() {
        let created_at = Timestamp::UNIX_EPOCH;

        let request = OrderRequest {
            customer_name: "Ada".to_string(),
            customer_email: "ada@example.com".to_string(),
            address: "London".to_string(),
            items: Vec::new(),
            total: 0,
        };

        let order = Order::accept(request, created_at);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, created_at);
    }
}
