//! Depot access to the shared server state.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Handler access to the injected [`State`].
pub(crate) trait DepotExt {
    /// The server state, or a 500 if the router was built without it.
    fn state(&self) -> Result<&State, StatusError>;
}

impl DepotExt for Depot {
    fn state(&self) -> Result<&State, StatusError> {
        self.obtain::<Arc<State>>().map(|state| &**state).map_err(|_missing| {
            error!("server state missing from depot, is the inject hoop installed?");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::{prelude::*, test::TestClient};

    use super::*;

    #[handler]
    async fn needs_state(depot: &mut Depot) -> Result<&'static str, StatusError> {
        depot.state()?;

        Ok("ok")
    }

    #[tokio::test]
    async fn missing_state_is_a_server_error() {
        let service = Service::new(Router::with_path("needs-state").get(needs_state));

        let res = TestClient::get("http://example.com/needs-state")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
