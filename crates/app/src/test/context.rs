//! Test context for service-level tests.

use std::sync::Arc;

use heirloom::products::{
    Branch, BranchUuid, Category, CategoryUuid, Product, ProductImages, ProductUuid,
};

use crate::{
    catalog::Catalog,
    domain::{
        orders::MemoryOrdersService, products::MemoryProductsService,
        storefront::MemoryStorefrontService,
    },
};

pub(crate) struct TestContext {
    pub coat: Product,
    pub shirt: Product,
    pub products: MemoryProductsService,
    pub storefront: MemoryStorefrontService,
    pub orders: MemoryOrdersService,
}

impl TestContext {
    /// A catalog with a coat at 450.00, a shirt at 120.00 and a featured scarf.
    pub fn new() -> Self {
        let coat = product("Trench Coat", "outerwear", 45_000, false);
        let shirt = product("Oxford Shirt", "shirts", 12_000, false);
        let scarf = product("Silk Scarf", "outerwear", 3_500, true);

        let categories = vec![category("Outerwear", "outerwear"), category("Shirts", "shirts")];

        let branches = vec![Branch {
            id: BranchUuid::new(),
            name: "Marylebone".to_string(),
            city: "London".to_string(),
            address: "1 Marylebone High St".to_string(),
        }];

        let catalog = Catalog::new(vec![coat.clone(), shirt.clone(), scarf], categories, branches)
            .map(Arc::new)
            .expect("test catalog should be consistent");

        let products = MemoryProductsService::new(Arc::clone(&catalog));

        Self {
            coat,
            shirt,
            storefront: MemoryStorefrontService::new(Arc::clone(&catalog)),
            orders: MemoryOrdersService::new(Arc::new(products.clone())),
            products,
        }
    }
}

pub(crate) fn product(name: &str, category: &str, price: u64, featured: bool) -> Product {
    Product {
        id: ProductUuid::new(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        era: "1970s".to_string(),
        condition: "good".to_string(),
        material: "cotton".to_string(),
        images: ProductImages::new(),
        featured,
    }
}

pub(crate) fn category(name: &str, slug: &str) -> Category {
    Category {
        id: CategoryUuid::new(),
        name: name.to_string(),
        slug: slug.to_string(),
    }
}
