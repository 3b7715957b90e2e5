//! Catalog seed
//!
//! The storefront catalog is loaded once at startup from a YAML file and
//! served read-only from memory.

use std::{io, path::Path};

use heirloom::products::{Branch, Category, Product, ProductUuid};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading the catalog seed.
#[derive(Debug, Error)]
pub enum CatalogSeedError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog file")]
    Parse(#[from] serde_norway::Error),

    #[error("product {0} appears more than once")]
    DuplicateProduct(ProductUuid),

    #[error("product {product} references unknown category {category}")]
    UnknownCategory {
        product: ProductUuid,
        category: String,
    },
}

/// Catalog file layout.
#[derive(Debug, Default, Deserialize)]
struct CatalogSeed {
    #[serde(default)]
    categories: Vec<Category>,

    #[serde(default)]
    products: Vec<Product>,

    #[serde(default)]
    branches: Vec<Branch>,
}

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: FxHashMap<ProductUuid, Product>,
    categories: Vec<Category>,
    branches: Vec<Branch>,
}

impl Catalog {
    /// Build a catalog from its parts.
    ///
    /// # Errors
    ///
    /// Returns an error if a product id repeats, or a product names a category
    /// that isn't listed (when any categories are listed at all).
    pub fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        branches: Vec<Branch>,
    ) -> Result<Self, CatalogSeedError> {
        let slugs: FxHashSet<&str> = categories.iter().map(|c| c.slug.as_str()).collect();

        if !slugs.is_empty()
            && let Some(product) = products
                .iter()
                .find(|product| !slugs.contains(product.category.as_str()))
        {
            return Err(CatalogSeedError::UnknownCategory {
                product: product.id,
                category: product.category.clone(),
            });
        }

        let mut index = FxHashMap::default();

        for product in products {
            let id = product.id;

            if index.insert(id, product).is_some() {
                return Err(CatalogSeedError::DuplicateProduct(id));
            }
        }

        Ok(Self {
            products: index,
            categories,
            branches,
        })
    }

    /// Parse a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the catalog is inconsistent.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogSeedError> {
        let seed: CatalogSeed = serde_norway::from_str(yaml)?;

        Self::new(seed.products, seed.categories, seed.branches)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogSeedError> {
        let path = path.as_ref();

        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogSeedError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_yaml(&yaml)?;

        info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            branches = catalog.branches.len(),
            "catalog loaded from {}",
            path.display()
        );

        Ok(catalog)
    }

    /// Products ordered for the storefront: featured first, then by name.
    pub fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();

        products.sort_by(|a, b| b.featured.cmp(&a.featured).then_with(|| a.name.cmp(&b.name)));

        products
    }

    /// Look up a single product.
    pub fn product(&self, id: ProductUuid) -> Option<&Product> {
        self.products.get(&id)
    }

    /// All categories, in file order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All branches, in file order.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use testresult::TestResult;

    use super::*;

    const SEED: &str = r#"
categories:
  - id: 0190f3c4-0000-7000-8000-000000000001
    name: Outerwear
    slug: outerwear
  - id: 0190f3c4-0000-7000-8000-000000000002
    name: Accessories
    slug: accessories
products:
  - id: 0190f3c4-0000-7000-8000-0000000000a1
    name: Wax Jacket
    price: 18000
    category: outerwear
    era: 1980s
    condition: good
    material: waxed cotton
  - id: 0190f3c4-0000-7000-8000-0000000000a2
    name: Silk Scarf
    price: 3500
    category: accessories
    era: 1970s
    condition: excellent
    material: silk
    images: ["https://img.example/scarf.jpg"]
    featured: true
branches:
  - id: 0190f3c4-0000-7000-8000-0000000000b1
    name: Marylebone
    city: London
    address: 1 Marylebone High St
"#;

    #[test]
    fn parses_seed() -> TestResult {
        let catalog = Catalog::from_yaml(SEED)?;

        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.branches().len(), 1);

        Ok(())
    }

    #[test]
    fn featured_products_come_first() -> TestResult {
        let catalog = Catalog::from_yaml(SEED)?;

        let names: Vec<String> = catalog.products().into_iter().map(|p| p.name).collect();

        assert_eq!(names, ["Silk Scarf", "Wax Jacket"]);

        Ok(())
    }

    #[test]
    fn empty_seed_is_empty_catalog() -> TestResult {
        let catalog = Catalog::from_yaml("{}")?;

        assert!(catalog.products().is_empty());
        assert!(catalog.categories().is_empty());

        Ok(())
    }

    #[test]
    fn rejects_duplicate_products() {
        let yaml = r"
products:
  - id: 0190f3c4-0000-7000-8000-0000000000a1
    name: One
    price: 1
    category: x
    era: x
    condition: x
    material: x
  - id: 0190f3c4-0000-7000-8000-0000000000a1
    name: Two
    price: 2
    category: x
    era: x
    condition: x
    material: x
";

        let result = Catalog::from_yaml(yaml);

        assert!(
            matches!(result, Err(CatalogSeedError::DuplicateProduct(_))),
            "expected DuplicateProduct, got {result:?}"
        );
    }

    #[test]
    fn rejects_unknown_category() {
        let yaml = r"
categories:
  - id: 0190f3c4-0000-7000-8000-000000000001
    name: Outerwear
    slug: outerwear
products:
  - id: 0190f3c4-0000-7000-8000-0000000000a1
    name: Loafers
    price: 9000
    category: shoes
    era: 1990s
    condition: worn
    material: leather
";

        let result = Catalog::from_yaml(yaml);

        assert!(
            matches!(result, Err(CatalogSeedError::UnknownCategory { ref category, .. }) if category == "shoes"),
            "expected UnknownCategory, got {result:?}"
        );
    }

    #[test]
    fn rejects_malformed_yaml() {
        let result = Catalog::from_yaml("products: [[[");

        assert!(
            matches!(result, Err(CatalogSeedError::Parse(_))),
            "expected Parse, got {result:?}"
        );
    }

    #[tokio::test]
    async fn loads_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(SEED.as_bytes())?;

        let catalog = Catalog::load(file.path()).await?;

        assert_eq!(catalog.products().len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let result = Catalog::load("/definitely/not/here.yaml").await;

        assert!(
            matches!(result, Err(CatalogSeedError::Io { .. })),
            "expected Io, got {result:?}"
        );
    }

    #[tokio::test]
    async fn bundled_seed_catalog_is_consistent() -> TestResult {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/catalog.yaml");

        let catalog = Catalog::load(path).await?;

        assert_eq!(catalog.products().len(), 5);
        assert!(
            catalog.products().first().is_some_and(|p| p.featured),
            "featured products lead the listing"
        );

        Ok(())
    }
}
