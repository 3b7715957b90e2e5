//! Storefront listings: categories and branches.

use std::sync::Arc;

use async_trait::async_trait;
use heirloom::products::{Branch, Category};
use mockall::automock;

use crate::catalog::Catalog;

#[derive(Debug, Clone)]
pub struct MemoryStorefrontService {
    catalog: Arc<Catalog>,
}

impl MemoryStorefrontService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl StorefrontService for MemoryStorefrontService {
    async fn list_categories(&self) -> Vec<Category> {
        self.catalog.categories().to_vec()
    }

    async fn list_branches(&self) -> Vec<Branch> {
        self.catalog.branches().to_vec()
    }
}

#[automock]
#[async_trait]
pub trait StorefrontService: Send + Sync {
    /// Product categories, in display order.
    async fn list_categories(&self) -> Vec<Category>;

    /// Store branches, in display order.
    async fn list_branches(&self) -> Vec<Branch>;
}
