//! Core engine for rackquote: catalog value types, compatibility rules,
//! bay allocation, and cost resolution over an in-progress configuration.
//!
//! Everything here is pure computation over in-memory catalog snapshots.
//! Catalog rows are read-only facts; the [`config::Configuration`] value is
//! advanced through pure transitions that either return a new value or a
//! recoverable [`error::SelectionError`] leaving the input untouched.

pub mod audit;
pub mod bays;
pub mod catalog;
pub mod compat;
pub mod config;
pub mod cost;
pub mod error;
pub mod family;
pub mod gpu;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        bays::{BayUsage, DriveClass},
        catalog::{Chassis, Cpu, Gpu, GpuSelection, Ram, Storage},
        compat::ChassisConstraints,
        config::Configuration,
        cost::CostBreakdown,
        family::CpuFamily,
        gpu::GpuTotals,
    };
}
