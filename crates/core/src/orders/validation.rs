//! Order request validation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orders::OrderRequest;

/// The first problem found with an order request.
///
/// Serializes as the `{message, field}` body the API returns with a 400.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Human readable description
    pub message: String,

    /// Path of the offending field, e.g. `items[0].quantity`
    pub field: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }
}

impl OrderRequest {
    /// Check the request is well formed.
    ///
    /// Doesn't check prices; only the server knows those.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::new("customerName", "customer name required"));
        }

        if self.customer_email.trim().is_empty() {
            return Err(ValidationError::new("customerEmail", "email required"));
        }

        if !looks_like_email(self.customer_email.trim()) {
            return Err(ValidationError::new("customerEmail", "invalid email address"));
        }

        if self.address.trim().is_empty() {
            return Err(ValidationError::new("address", "address required"));
        }

        if self.items.is_empty() {
            return Err(ValidationError::new("items", "cannot submit an empty cart"));
        }

        let mut seen = FxHashSet::default();

        for (index, item) in self.items.iter().enumerate() {
            if item.quantity == 0 {
                return Err(ValidationError::new(
                    format!("items[{index}].quantity"),
                    "quantity must be positive",
                ));
            }

            if !seen.insert(item.product_id) {
                return Err(ValidationError::new(
                    format!("items[{index}].productId"),
                    "duplicate product in order",
                ));
            }
        }

        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
