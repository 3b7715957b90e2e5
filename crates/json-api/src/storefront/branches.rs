//! Branch Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use heirloom::products::Branch;

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BranchResponse {
    /// The unique identifier of the branch
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// City the branch is in
    pub city: String,

    /// Street address
    pub address: String,
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        BranchResponse {
            id: branch.id.into(),
            name: branch.name,
            city: branch.city,
            address: branch.address,
        }
    }
}

/// Branch Index Handler
#[endpoint(tags("storefront"), summary = "List Branches")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<BranchResponse>>, StatusError> {
    let state = depot.state()?;

    let branches = state.app.storefront.list_branches().await;

    Ok(Json(branches.into_iter().map(Into::into).collect()))
}
