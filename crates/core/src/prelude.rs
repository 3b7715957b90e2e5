//! Heirloom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        Cart, CartError, CartLineItem,
        store::{CartCommand, CartSnapshot, CartStore, SubscriptionKey},
    },
    orders::{
        CustomerInfo, Order, OrderItem, OrderRequest, OrderStatus, OrderUuid, ValidationError,
    },
    pricing::PricingError,
    products::{Branch, BranchUuid, Category, CategoryUuid, Product, ProductImages, ProductUuid},
    uuids::TypedUuid,
};
