//! Cart Store
//!
//! An owned [`Cart`] with a single mutation entry point. Every change goes
//! through [`CartStore::apply`], which hands back the prior state so the
//! caller can roll it back, and notifies subscribers of the new cart.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use slotmap::{SlotMap, new_key_type};

use crate::{
    cart::{Cart, CartError},
    products::{Product, ProductUuid},
};

new_key_type! {
    /// Subscription Key
    pub struct SubscriptionKey;
}

/// Callback invoked with the cart after every change.
pub type CartListener = Box<dyn FnMut(&Cart) + Send>;

/// A mutation of the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// Add units of a product, merging with an existing line.
    Add {
        /// Product to add
        product: Product,
        /// Units to add, must be positive
        quantity: u32,
    },

    /// Remove a product's line. Absent products are ignored.
    Remove(ProductUuid),

    /// Replace a product's quantity; zero removes the line.
    SetQuantity {
        /// Product whose line to update
        product: ProductUuid,
        /// New quantity
        quantity: u32,
    },

    /// Remove every line.
    Clear,
}

/// The cart as it was before a command was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a snapshot is the only way to roll a command back"]
pub struct CartSnapshot(Cart);

impl CartSnapshot {
    /// The captured cart.
    pub fn cart(&self) -> &Cart {
        &self.0
    }
}

/// Owned cart with change notification and rollback.
pub struct CartStore {
    cart: Cart,
    listeners: SlotMap<SubscriptionKey, CartListener>,
}

impl Debug for CartStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Cart::new())
    }
}

impl CartStore {
    /// Create a store around an existing cart.
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        Self {
            cart,
            listeners: SlotMap::with_key(),
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot(self.cart.clone())
    }

    /// Apply a command.
    ///
    /// Subscribers are notified only if the cart actually changed.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the command is rejected; the cart is unchanged
    /// and no subscriber is notified.
    pub fn apply(&mut self, command: CartCommand) -> Result<CartSnapshot, CartError> {
        let previous = self.snapshot();

        let changed = match command {
            CartCommand::Add { product, quantity } => {
                self.cart.add_item(product, quantity)?;

                true
            }
            CartCommand::Remove(product) => self.cart.remove_item(product),
            CartCommand::SetQuantity { product, quantity } => {
                self.cart.set_quantity(product, quantity)
            }
            CartCommand::Clear => {
                let changed = !self.cart.is_empty();

                self.cart.clear();

                changed
            }
        };

        if changed {
            self.notify();
        }

        Ok(previous)
    }

    /// Restore the cart captured in `snapshot`.
    pub fn rollback(&mut self, snapshot: CartSnapshot) {
        if self.cart == snapshot.0 {
            return;
        }

        self.cart = snapshot.0;
        self.notify();
    }

    /// Register a listener called with the cart after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + Send + 'static) -> SubscriptionKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Total price of the current cart in minor units.
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    fn notify(&mut self) {
        let cart = &self.cart;

        self.listeners
            .values_mut()
            .for_each(|listener| listener(cart));
    }
}
