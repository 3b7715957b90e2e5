//! Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the catalog has products to sell, otherwise `unavailable`
    pub status: String,

    /// Number of products in the loaded catalog
    pub products: usize,

    /// When the server started serving (RFC 3339)
    pub started_at: String,
}

/// Healthcheck handler
///
/// Reports ready only once the catalog holds at least one product; an empty or
/// unreadable catalog answers 503 so load balancers keep traffic away.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Catalog loaded"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Catalog empty or unreadable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.state()?;

    let products = match state.app.products.list_products().await {
        Ok(products) => products.len(),
        Err(error) => {
            warn!("healthcheck could not read the catalog: {error}");

            0
        }
    };

    let status = if products == 0 {
        res.status_code(StatusCode::SERVICE_UNAVAILABLE);

        "unavailable"
    } else {
        "ok"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        products,
        started_at: state.started_at.to_string(),
    }))
}
