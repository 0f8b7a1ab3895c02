#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! DOM-free building blocks for the Helio energy dashboard pages.
//!
//! Layout: `i18n` (language resolution, translation trees and override merging),
//! `viewport` (design-canvas fitting), `env` (ambient locale/viewport access),
//! `data` (typed datasets and the fetch-with-fallback source), `pages` (page catalog
//! and composition), `config` (embedding options), plus `format` and `chart` helpers
//! used by the views.

pub mod chart;
pub mod config;
pub mod data;
pub mod env;
pub mod error;
pub mod format;
pub mod i18n;
pub mod pages;
pub mod viewport;

pub use config::{ApiConfig, PageOptions};
pub use data::{CancelFlag, DataSource, Dataset, DatasetKind, HttpResponse, Transport};
pub use env::{EnvironmentProvider, StaticEnvironment};
pub use error::{ConfigError, ConfigResult, DataSourceError, ShapeError, TransportError};
pub use i18n::{Language, LocalizedTexts, TextNode, merge_texts, resolve_language};
pub use pages::{PageKind, PageModel};
pub use viewport::{Anchor, DesignCanvas, FitPolicy, FitResult, PageLayout, ViewportSize, fit};
