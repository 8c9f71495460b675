//! GPU quantity resolution.
//!
//! Per-model ceilings come first, then chassis-specific slot rules. A
//! model with no rule resolves to zero and cannot be added to a
//! configuration at all until a rule exists for it.

use crate::catalog::{Chassis, Gpu, GpuSelection};
use serde::Serialize;

/// Single-slot inference card, capped at one per node regardless of
/// chassis.
const TESLA_P4: &str = "Tesla P4";

const RTX_A4000: &str = "RTX A4000";
const RTX_3090: &str = "RTX 3090";

/// Chassis that take a full eight A4000s irrespective of their advertised
/// slot count.
const HIGH_SLOT_CHASSIS: [&str; 2] = ["Tyan FT77D-B7109", "Asus ESC4000 G3"];

/// The only chassis qualified for the RTX 3090's power and clearance
/// envelope.
const RTX_3090_CHASSIS: &str = "ZhenLoong X412 4U GPU";

const MAX_A4000: u32 = 8;
const MAX_RTX_3090: u32 = 4;

/// Maximum installable quantity for `gpu`, given the chassis chosen so
/// far (or none, during early browsing).
///
/// First matching rule wins:
/// 1. hard per-model ceilings (Tesla P4);
/// 2. chassis-independent defaults when no chassis is chosen yet;
/// 3. chassis-specific slot rules otherwise.
#[must_use]
pub fn max_quantity(gpu: &Gpu, chassis: Option<&Chassis>) -> u32 {
    if gpu.model == TESLA_P4 {
        return 1;
    }

    let Some(chassis) = chassis else {
        return match gpu.model.as_str() {
            RTX_A4000 => MAX_A4000,
            RTX_3090 => MAX_RTX_3090,
            _ => 0,
        };
    };

    match gpu.model.as_str() {
        RTX_A4000 => {
            if HIGH_SLOT_CHASSIS.contains(&chassis.model.as_str()) {
                MAX_A4000
            } else {
                chassis.max_gpu_slots.min(MAX_A4000)
            }
        }
        RTX_3090 if chassis.model == RTX_3090_CHASSIS => MAX_RTX_3090,
        _ => 0,
    }
}

///
/// GpuTotals
///
/// Aggregate VRAM and thermal figures over a GPU selection, for quote
/// display.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct GpuTotals {
    pub vram: u32,
    pub tdp: u32,
}

impl GpuTotals {
    #[must_use]
    pub fn of(selection: &[GpuSelection]) -> Self {
        selection.iter().fold(Self::default(), |acc, entry| Self {
            vram: acc.vram + entry.gpu.vram * entry.quantity,
            tdp: acc.tdp + entry.gpu.tdp * entry.quantity,
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gpu(model: &str) -> Gpu {
        Gpu {
            id: 1,
            model: model.to_string(),
            manufacturer: "NVIDIA".to_string(),
            vram: 16,
            tdp: 140,
            price: 900.0,
            form_factor: "Single Slot".to_string(),
            length: 241,
            supplementary_power: false,
        }
    }

    fn chassis(model: &str, slots: u32) -> Chassis {
        Chassis {
            id: 7,
            model: model.to_string(),
            manufacturer: "Test".to_string(),
            form_factor: "2U".to_string(),
            drive_bays: 8,
            max_nvme_drives: 0,
            max_sff_drives: 0,
            max_lff_drives: 8,
            max_gpu_slots: slots,
            max_power_supply: 1600,
            max_tdp: 1200,
            max_gpu_length: 300,
            price: 1500.0,
            multi_node: false,
            compatible_cpus: vec![],
            compatible_gpus: vec![],
            is_lto_compatible: false,
        }
    }

    #[test]
    fn tesla_p4_is_capped_at_one_with_and_without_chassis() {
        let p4 = gpu("Tesla P4");
        assert_eq!(max_quantity(&p4, None), 1);
        assert_eq!(max_quantity(&p4, Some(&chassis("Anything", 10))), 1);
    }

    #[test]
    fn browsing_defaults_apply_without_a_chassis() {
        assert_eq!(max_quantity(&gpu("RTX A4000"), None), 8);
        assert_eq!(max_quantity(&gpu("RTX 3090"), None), 4);
        assert_eq!(max_quantity(&gpu("H100"), None), 0);
    }

    #[test]
    fn a4000_takes_eight_in_high_slot_chassis() {
        let c = chassis("Tyan FT77D-B7109", 4);
        assert_eq!(max_quantity(&gpu("RTX A4000"), Some(&c)), 8);

        let c = chassis("Asus ESC4000 G3", 4);
        assert_eq!(max_quantity(&gpu("RTX A4000"), Some(&c)), 8);
    }

    #[test]
    fn a4000_is_otherwise_limited_by_slots() {
        let c = chassis("Supermicro 6029P", 3);
        assert_eq!(max_quantity(&gpu("RTX A4000"), Some(&c)), 3);

        let c = chassis("Supermicro 6029P", 12);
        assert_eq!(max_quantity(&gpu("RTX A4000"), Some(&c)), 8);
    }

    #[test]
    fn rtx_3090_fits_only_its_qualified_chassis() {
        let c = chassis("ZhenLoong X412 4U GPU", 4);
        assert_eq!(max_quantity(&gpu("RTX 3090"), Some(&c)), 4);

        let c = chassis("Tyan FT77D-B7109", 8);
        assert_eq!(max_quantity(&gpu("RTX 3090"), Some(&c)), 0);
    }

    #[test]
    fn unknown_models_resolve_to_zero_with_a_chassis() {
        let c = chassis("Tyan FT77D-B7109", 8);
        assert_eq!(max_quantity(&gpu("H100"), Some(&c)), 0);
    }

    #[test]
    fn totals_sum_over_quantities() {
        let mut a4000 = gpu("RTX A4000");
        a4000.vram = 16;
        a4000.tdp = 140;
        let selection = vec![GpuSelection {
            gpu: a4000,
            quantity: 4,
        }];

        let totals = GpuTotals::of(&selection);
        assert_eq!(totals.vram, 64);
        assert_eq!(totals.tdp, 560);
    }

    proptest! {
        /// Widening the slot count never lowers the allowed quantity
        /// (all else equal), for every known model.
        #[test]
        fn quantity_is_monotone_in_slot_count(
            slots_a in 0u32..16,
            extra in 0u32..16,
            model in prop_oneof![
                Just("Tesla P4"),
                Just("RTX A4000"),
                Just("RTX 3090"),
                Just("H100"),
            ],
        ) {
            let g = gpu(model);
            let narrow = chassis("Supermicro 6029P", slots_a);
            let wide = chassis("Supermicro 6029P", slots_a + extra);

            prop_assert!(
                max_quantity(&g, Some(&wide)) >= max_quantity(&g, Some(&narrow))
            );
        }
    }
}
