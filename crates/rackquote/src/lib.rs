//! ## Crate layout
//! - `core`: catalog value types, compatibility rules, bay allocation,
//!   configuration transitions, and cost resolution.
//! - `catalog`: the catalog-provider seam, filter types and an
//!   in-memory source.
//! - `error`: the public error taxonomy wrapping core errors.
//! - `quote`: finished-quote assembly for the presentation layer.
//!
//! The `prelude` module mirrors the surface a wizard-style caller uses.

pub use rackquote_core as core;

pub mod catalog;
pub mod error;
pub mod quote;

pub use error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalog::{CatalogSource, CpuFilter, GpuFilter, MemoryCatalog, RamFilter, StorageFilter},
        core::prelude::*,
        error::Error,
        quote::QuoteSummary,
    };
}
