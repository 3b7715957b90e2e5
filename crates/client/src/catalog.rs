//! Product catalog client with a read cache.

use std::{fmt, sync::Arc};

use heirloom::products::{Branch, Category, Product, ProductUuid};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::warn;

use crate::transport::{ApiRequest, Transport, TransportError};

/// Errors returned by [`CatalogClient`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id
    #[error("product {0} not found")]
    NotFound(ProductUuid),

    /// The API answered with an unexpected status
    #[error("catalog request failed with status {0}")]
    Status(u16),

    /// The API answered with a body of the wrong shape
    #[error("unexpected catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never got a response
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Read-only access to products, categories and branches.
pub struct CatalogClient {
    transport: Arc<dyn Transport>,
    products: RwLock<Option<Vec<Product>>>,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient").finish_non_exhaustive()
    }
}

impl CatalogClient {
    /// Create a client with an empty cache.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            products: RwLock::new(None),
        }
    }

    /// Fetch every product and remember the listing.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-200 status or a malformed body.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = self.fetch("/api/products/").await?;

        *self.products.write().await = Some(products.clone());

        Ok(products)
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] on 404, otherwise as [`Self::list_products`].
    pub async fn get_product(&self, product: ProductUuid) -> Result<Product, CatalogError> {
        let response = self
            .transport
            .send(ApiRequest::get(format!("/api/products/{product}/")))
            .await?;

        match response.status {
            200 => Ok(response.parse().inspect_err(|error| {
                warn!(%product, "product response did not match schema: {error}");
            })?),
            404 => Err(CatalogError::NotFound(product)),
            status => Err(CatalogError::Status(status)),
        }
    }

    /// Fetch product categories.
    ///
    /// # Errors
    ///
    /// As [`Self::list_products`].
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.fetch("/api/categories/").await
    }

    /// Fetch store branches.
    ///
    /// # Errors
    ///
    /// As [`Self::list_products`].
    pub async fn list_branches(&self) -> Result<Vec<Branch>, CatalogError> {
        self.fetch("/api/branches/").await
    }

    /// The last successful product listing, without touching the network.
    pub async fn cached_products(&self) -> Option<Vec<Product>> {
        self.products.read().await.clone()
    }

    /// Replace the cached listing with a fresh one.
    ///
    /// # Errors
    ///
    /// As [`Self::list_products`]. The previous cache is kept on failure.
    pub async fn refresh(&self) -> Result<Vec<Product>, CatalogError> {
        self.list_products().await
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let response = self.transport.send(ApiRequest::get(path)).await?;

        if response.status != 200 {
            return Err(CatalogError::Status(response.status));
        }

        Ok(response.parse().inspect_err(|error| {
            warn!(path, "catalog response did not match schema: {error}");
        })?)
    }
}
