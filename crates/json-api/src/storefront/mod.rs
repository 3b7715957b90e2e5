//! Storefront listings

pub(crate) mod branches;
pub(crate) mod categories;
