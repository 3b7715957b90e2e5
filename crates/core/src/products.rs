//! Products

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Branch UUID
pub type BranchUuid = TypedUuid<Branch>;

/// Image URLs in display order. Most listings carry a handful of photos.
pub type ProductImages = SmallVec<[String; 4]>;

/// A catalog product.
///
/// Products are owned by the backend; clients only ever hold read-only copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: ProductUuid,

    /// Display name
    pub name: String,

    /// Price in minor currency units (pence/cents)
    pub price: u64,

    /// Category slug
    pub category: String,

    /// Decade or period the piece dates from, e.g. `"1970s"`
    pub era: String,

    /// Condition grading, e.g. `"excellent"`
    pub condition: String,

    /// Primary material
    pub material: String,

    /// Image URLs, first is the cover image
    #[serde(default)]
    pub images: ProductImages,

    /// Whether the product is featured on the storefront
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Cover image, if the product has any images.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier
    pub id: CategoryUuid,

    /// Display name
    pub name: String,

    /// URL slug, referenced by [`Product::category`]
    pub slug: String,
}

/// Physical store branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Branch identifier
    pub id: BranchUuid,

    /// Display name
    pub name: String,

    /// City the branch is in
    pub city: String,

    /// Street address
    pub address: String,
}
