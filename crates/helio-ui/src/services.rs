//! Network services used by the pages.

pub(crate) mod api;
