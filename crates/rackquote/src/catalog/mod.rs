//! The catalog-provider seam.
//!
//! The engine consumes read-only snapshots of catalog rows. Callers can
//! implement [`CatalogSource`] over whatever storage they have; the
//! bundled [`MemoryCatalog`] serves rows from plain vectors, which is all
//! the engine itself ever requires.

mod filter;
mod source;

pub use filter::{CpuFilter, GpuFilter, RamFilter, StorageFilter};
pub use source::{CatalogSource, MemoryCatalog};
