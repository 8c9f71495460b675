//! Catalog data-quality audit.
//!
//! The sweep is non-failing: every finding is collected and returned to
//! the caller, which decides how to surface them. The engine itself never
//! rejects or repairs a catalog row at runtime: a chassis whose bay
//! total disagrees with its per-class maxima still allocates from the
//! per-class counts.

use crate::{
    catalog::{Chassis, Cpu, Gpu},
    family::CpuFamily,
};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// CatalogIssue
///
/// One data-quality finding from [`audit_catalog`].
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum CatalogIssue {
    /// `driveBays` disagrees with the sum of the per-class maxima.
    #[error(
        "chassis {model} (id {chassis_id}) advertises {drive_bays} bays but its classes sum to {bay_class_sum}"
    )]
    BayCountMismatch {
        chassis_id: u32,
        model: String,
        drive_bays: u32,
        bay_class_sum: u32,
    },

    /// Two GPU rows share a model string; compatibility matching is by
    /// model, so the rows are indistinguishable to the engine.
    #[error("GPU model {model} appears on more than one catalog row")]
    DuplicateGpuModel { model: String },

    /// A core/thread/TDP/price figure that must be positive is zero.
    #[error("CPU {model} (id {cpu_id}) has a non-positive {field}")]
    NonPositiveCpuSpec {
        cpu_id: u32,
        model: String,
        field: &'static str,
    },

    /// The model string classifies to no known family, so the CPU can
    /// never pass a chassis family check.
    #[error("CPU {model} (id {cpu_id}) classifies to no known family")]
    UnknownCpuFamily { cpu_id: u32, model: String },
}

/// Sweep the catalog for data-quality findings.
#[must_use]
pub fn audit_catalog(cpus: &[Cpu], gpus: &[Gpu], chassis: &[Chassis]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for cpu in cpus {
        for (field, value) in [
            ("core count", cpu.cores),
            ("thread count", cpu.threads),
            ("TDP", cpu.tdp),
        ] {
            if value == 0 {
                issues.push(CatalogIssue::NonPositiveCpuSpec {
                    cpu_id: cpu.id,
                    model: cpu.model.clone(),
                    field,
                });
            }
        }
        if cpu.price <= 0.0 {
            issues.push(CatalogIssue::NonPositiveCpuSpec {
                cpu_id: cpu.id,
                model: cpu.model.clone(),
                field: "price",
            });
        }
        if cpu.family() == CpuFamily::Unknown {
            issues.push(CatalogIssue::UnknownCpuFamily {
                cpu_id: cpu.id,
                model: cpu.model.clone(),
            });
        }
    }

    let mut seen = BTreeSet::new();
    for gpu in gpus {
        if !seen.insert(gpu.model.as_str()) {
            issues.push(CatalogIssue::DuplicateGpuModel {
                model: gpu.model.clone(),
            });
        }
    }

    for candidate in chassis {
        let bay_class_sum = candidate.bay_class_sum();
        if bay_class_sum != candidate.drive_bays {
            issues.push(CatalogIssue::BayCountMismatch {
                chassis_id: candidate.id,
                model: candidate.model.clone(),
                drive_bays: candidate.drive_bays,
                bay_class_sum,
            });
        }
    }

    issues
}

///
/// TESTS
///
