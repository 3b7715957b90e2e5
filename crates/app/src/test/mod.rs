//! Test support.

mod context;

pub(crate) use context::{TestContext, category, product};
