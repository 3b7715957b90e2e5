//! App Context

use std::{path::Path, sync::Arc};

use crate::{
    catalog::{Catalog, CatalogSeedError},
    domain::{
        orders::{MemoryOrdersService, OrdersService},
        products::{MemoryProductsService, ProductsService},
        storefront::{MemoryStorefrontService, StorefrontService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub storefront: Arc<dyn StorefrontService>,
    pub orders: Arc<dyn OrdersService>,
}

impl AppContext {
    /// Build application context around an in-memory catalog.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);

        let products: Arc<dyn ProductsService> =
            Arc::new(MemoryProductsService::new(Arc::clone(&catalog)));

        Self {
            storefront: Arc::new(MemoryStorefrontService::new(catalog)),
            orders: Arc::new(MemoryOrdersService::new(Arc::clone(&products))),
            products,
        }
    }

    /// Build application context from a catalog seed file.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog file can't be loaded.
    pub async fn from_catalog_file(path: impl AsRef<Path>) -> Result<Self, CatalogSeedError> {
        Ok(Self::from_catalog(Catalog::load(path).await?))
    }
}
