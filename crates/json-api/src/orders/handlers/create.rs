//! Create Order Handler

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::debug;

use heirloom::orders::{OrderRequest, ValidationError};
use heirloom_app::domain::orders::OrdersServiceError;

use crate::{
    extensions::*,
    orders::{
        errors::{into_status_error, render_validation_error},
        handlers::{OrderItemPayload, OrderResponse},
    },
};

/// Create Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CreateOrderRequest {
    /// Customer full name
    pub customer_name: String,

    /// Customer email
    pub customer_email: String,

    /// Shipping address
    pub address: String,

    /// Ordered products, one line per product
    pub items: Vec<OrderItemPayload>,

    /// Total the customer saw, in pence/cents
    pub total: u64,
}

impl From<CreateOrderRequest> for OrderRequest {
    fn from(request: CreateOrderRequest) -> Self {
        OrderRequest {
            customer_name: request.customer_name,
            customer_email: request.customer_email,
            address: request.address,
            items: request.items.into_iter().map(Into::into).collect(),
            total: request.total,
        }
    }
}

/// Create Order Handler
///
/// Validates the order, re-prices it against the catalog and stores it as
/// pending. Rejections carry a `{message, field}` body.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    request_body = CreateOrderRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Order created", body = OrderResponse),
        (status_code = StatusCode::BAD_REQUEST, description = "Order rejected"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.state()?;

    let request = match req.parse_json::<CreateOrderRequest>().await {
        Ok(request) => request,
        Err(error) => {
            debug!("could not parse order payload: {error}");

            render_validation_error(res, ValidationError::new("body", "invalid order payload"));

            return Ok(());
        }
    };

    let order = match state.app.orders.create_order(request.into()).await {
        Ok(order) => order,
        Err(OrdersServiceError::Invalid(error)) => {
            render_validation_error(res, error);

            return Ok(());
        }
        Err(error) => return Err(into_status_error(error)),
    };

    res.add_header(LOCATION, format!("/api/orders/{}", order.id), true)
        .or_500("set order location header")?
        .status_code(StatusCode::CREATED);

    res.render(Json(OrderResponse::from(order)));

    Ok(())
}
