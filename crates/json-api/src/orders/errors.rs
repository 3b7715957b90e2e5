//! Order Errors

use salvo::{http::StatusError, prelude::*};
use tracing::debug;

use heirloom::orders::ValidationError;
use heirloom_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound(order) => {
            debug!(%order, "order not found");

            StatusError::not_found().brief("Order not found")
        }
        OrdersServiceError::Invalid(error) => StatusError::bad_request().brief(error.to_string()),
    }
}

/// Render a validation failure as a `{message, field}` body with status 400.
pub(crate) fn render_validation_error(res: &mut Response, error: ValidationError) {
    debug!(field = %error.field, message = %error.message, "order rejected");

    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(error));
}
