//! Get Product Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use heirloom::products::Product;

use crate::{extensions::*, products::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// Category slug
    pub category: String,

    /// Decade or period the piece dates from
    pub era: String,

    /// Condition grading
    pub condition: String,

    /// Primary material
    pub material: String,

    /// Image URLs, cover image first
    pub images: Vec<String>,

    /// Whether the product is featured on the storefront
    pub featured: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into(),
            name: product.name,
            price: product.price,
            category: product.category,
            era: product.era,
            condition: product.condition,
            material: product.material,
            images: product.images.into_vec(),
            featured: product.featured,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
