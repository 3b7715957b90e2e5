//! Shared server state

use std::sync::Arc;

use heirloom_app::context::AppContext;
use jiff::Timestamp;

/// State injected into every request.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// When the catalog finished loading and the server began serving.
    pub(crate) started_at: Timestamp,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self {
            app,
            started_at: Timestamp::now(),
        })
    }
}
