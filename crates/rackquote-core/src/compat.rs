//! Chassis compatibility filtering.
//!
//! Each candidate is judged independently against the partial
//! configuration; the first failing check wins and is reported as a typed
//! [`Incompatibility`]. Filtering preserves catalog order; callers
//! normally pre-sort the chassis list by price ascending.

use crate::{
    bays,
    catalog::{Chassis, Cpu, GpuSelection, Storage},
    family::CpuFamily,
};
use thiserror::Error as ThisError;

/// Fraction of the power supply a configuration may draw; the rest is
/// reserved headroom.
pub const POWER_HEADROOM_RATIO: f64 = 0.8;

///
/// ChassisConstraints
///
/// The partial configuration's view used to qualify chassis candidates.
/// Borrowed from a [`crate::config::Configuration`] via
/// [`crate::config::Configuration::constraints`], or assembled directly
/// by callers that manage their own state.
///

#[derive(Clone, Copy, Debug)]
pub struct ChassisConstraints<'a> {
    pub cpu: Option<&'a Cpu>,
    pub dual_cpu: bool,
    pub gpus: &'a [GpuSelection],
    pub storage: &'a [Storage],
    pub total_power_watts: f64,
    pub lto: bool,
}

impl ChassisConstraints<'_> {
    /// Judge one candidate. `Ok(())` means every check passed; the error
    /// names the first check that failed.
    ///
    /// Check order: LTO, CPU family, GPU slots and models, storage bays,
    /// power headroom. GPU and storage checks are vacuously true for
    /// empty selections.
    pub fn check(&self, chassis: &Chassis) -> Result<(), Incompatibility> {
        if self.lto && !chassis.is_lto_compatible {
            return Err(Incompatibility::LeaseToOwn);
        }

        if let Some(cpu) = self.cpu {
            let family = cpu.family();
            if !chassis.supports_cpu_family(family.as_tag()) {
                return Err(Incompatibility::CpuFamily { family });
            }
        }

        if !self.gpus.is_empty() {
            let required: u32 = self.gpus.iter().map(|entry| entry.quantity).sum();
            if chassis.max_gpu_slots < required {
                return Err(Incompatibility::GpuSlots {
                    required,
                    available: chassis.max_gpu_slots,
                });
            }

            if chassis.compatible_gpus.is_empty() {
                return Err(Incompatibility::NoGpuSupport);
            }
            for entry in self.gpus {
                if !chassis.supports_gpu_model(&entry.gpu.model) {
                    return Err(Incompatibility::GpuModel {
                        model: entry.gpu.model.clone(),
                    });
                }
            }
        }

        if !self.storage.is_empty() && !bays::fits(self.storage, chassis) {
            return Err(Incompatibility::StorageBays);
        }

        let budget = f64::from(chassis.max_power_supply) * POWER_HEADROOM_RATIO;
        if self.total_power_watts > budget {
            return Err(Incompatibility::Power {
                required_watts: self.total_power_watts,
                budget_watts: budget,
            });
        }

        Ok(())
    }
}

/// Filter a chassis catalog down to the candidates compatible with the
/// partial configuration, preserving input order.
///
/// An empty result is a valid outcome: it means earlier selections must
/// be revised, not that filtering failed.
#[must_use]
pub fn compatible_chassis<'a>(
    catalog: &'a [Chassis],
    constraints: &ChassisConstraints<'_>,
) -> Vec<&'a Chassis> {
    catalog
        .iter()
        .filter(|chassis| constraints.check(chassis).is_ok())
        .collect()
}

///
/// Incompatibility
///
/// The first check a chassis candidate failed. Reasons are data so the
/// presentation layer can explain a rejection without re-deriving it.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
#[remain::sorted]
pub enum Incompatibility {
    #[error("chassis does not support the {family} CPU family")]
    CpuFamily { family: CpuFamily },

    #[error("chassis does not support the {model} GPU")]
    GpuModel { model: String },

    #[error("configuration needs {required} GPU slots, chassis has {available}")]
    GpuSlots { required: u32, available: u32 },

    #[error("lease-to-own requires an LTO-qualified chassis")]
    LeaseToOwn,

    #[error("chassis takes no GPUs")]
    NoGpuSupport,

    #[error("draw of {required_watts}W exceeds the {budget_watts}W power budget")]
    Power {
        required_watts: f64,
        budget_watts: f64,
    },

    #[error("selected drives do not fit the chassis bay layout")]
    StorageBays,
}

///
/// TESTS
///
