//! Cart

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    pricing::{self, DEFAULT_CURRENCY, PricingError},
    products::{Product, ProductUuid},
};

pub mod store;

/// Errors related to cart mutation or totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantities added to a cart must be positive.
    #[error("quantity for product {0} must be positive")]
    NonPositiveQuantity(ProductUuid),

    /// The combined quantity for a product no longer fits.
    #[error("quantity for product {0} is too large")]
    QuantityOverflow(ProductUuid),

    /// Pricing conversion failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// A single product and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    product: Product,
    quantity: u32,
}

impl CartLineItem {
    /// The product on this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// How many units of the product are in the cart. Always positive.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price × quantity in minor units.
    pub fn subtotal(&self) -> u64 {
        pricing::total([(self.product.price, self.quantity)])
    }
}

/// Shopping cart.
///
/// Holds at most one line per product id, in the order products were first
/// added. The total is derived from the lines on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartRecord")]
pub struct Cart {
    currency: String,
    items: Vec<CartLineItem>,
}

/// Cart as stored, before the one-line-per-product rule is enforced.
#[derive(Deserialize)]
struct CartRecord {
    currency: String,
    items: Vec<CartLineItem>,
}

impl TryFrom<CartRecord> for Cart {
    type Error = CartError;

    fn try_from(record: CartRecord) -> Result<Self, Self::Error> {
        let mut cart = Cart::with_currency(&record.currency)?;

        record
            .items
            .into_iter()
            .try_for_each(|line| cart.add_item(line.product, line.quantity))?;

        Ok(cart)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            items: Vec::new(),
        }
    }
}

impl Cart {
    /// Create an empty cart in the default currency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart displaying totals in the given ISO currency.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the currency code is unknown.
    pub fn with_currency(code: &str) -> Result<Self, CartError> {
        pricing::currency(code)?;

        Ok(Self {
            currency: code.to_string(),
            items: Vec::new(),
        })
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the product if there is one.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the quantity is zero or the merged quantity
    /// overflows. The cart is left unchanged.
    pub fn add_item(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::NonPositiveQuantity(product.id));
        }

        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityOverflow(product.id))?;

            return Ok(());
        }

        self.items.push(CartLineItem { product, quantity });

        Ok(())
    }

    /// Remove the line for `product`. Returns whether anything was removed.
    pub fn remove_item(&mut self, product: ProductUuid) -> bool {
        let before = self.items.len();

        self.items.retain(|line| line.product.id != product);

        self.items.len() != before
    }

    /// Replace the quantity for `product`. A zero quantity removes the line.
    ///
    /// Returns whether the cart changed; products not in the cart are ignored.
    pub fn set_quantity(&mut self, product: ProductUuid, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(product);
        }

        match self.line_mut(product) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;

                true
            }
            Some(_) | None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total price of the cart in minor units.
    pub fn total(&self) -> u64 {
        pricing::total(
            self.items
                .iter()
                .map(|line| (line.product.price, line.quantity)),
        )
    }

    /// Total price as displayable money in the cart currency.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the total can't be represented.
    pub fn total_money(&self) -> Result<Money<'static, Currency>, CartError> {
        Ok(pricing::to_money(self.total(), &self.currency)?)
    }

    /// Get the line for a product.
    pub fn get(&self, product: ProductUuid) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.product.id == product)
    }

    /// The cart lines, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Iterate over the cart lines.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// ISO code of the display currency.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    fn line_mut(&mut self, product: ProductUuid) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|line| line.product.id == product)
    }
}
