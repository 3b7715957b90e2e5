//! Category Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use heirloom::products::Category;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// The unique identifier of the category
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// URL slug referenced by products
    pub slug: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id.into(),
            name: category.name,
            slug: category.slug,
        }
    }
}

/// Category Index Handler
#[endpoint(tags("storefront"), summary = "List Categories")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<CategoryResponse>>, StatusError> {
    let state = depot.state()?;

    let categories = state.app.storefront.list_categories().await;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
