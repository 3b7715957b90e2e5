//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use heirloom::products::{Product, ProductUuid};
use mockall::automock;

use crate::{catalog::Catalog, domain::products::errors::ProductsServiceError};

#[derive(Debug, Clone)]
pub struct MemoryProductsService {
    catalog: Arc<Catalog>,
}

impl MemoryProductsService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProductsService for MemoryProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.catalog.products())
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        self.catalog
            .product(product)
            .cloned()
            .ok_or(ProductsServiceError::NotFound(product))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, featured first.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;
}
