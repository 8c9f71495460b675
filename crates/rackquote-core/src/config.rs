//! The in-progress configuration and its transitions.
//!
//! `Configuration` is an immutable value: every transition borrows the
//! current value and returns a fresh one, or a [`SelectionError`] that
//! leaves the caller's value untouched. This keeps each wizard step and
//! each engine rule independently testable.

use crate::{
    catalog::{Chassis, Cpu, Gpu, GpuSelection, Ram, Storage},
    compat::ChassisConstraints,
    error::SelectionError,
    gpu,
};
use serde::{Deserialize, Serialize};

///
/// Configuration
///
/// A partially-built server build. The storage list holds one entry per
/// physical drive, so duplicates are expected. The GPU list holds at most
/// one distinct model.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub cpu: Option<Cpu>,
    #[serde(rename = "isDualCPU")]
    pub dual_cpu: bool,
    pub gpu: Vec<GpuSelection>,
    pub ram: Option<Ram>,
    pub storage: Vec<Storage>,
    pub chassis: Option<Chassis>,
    #[serde(rename = "isLTO")]
    pub lto: bool,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a CPU, together with the single/dual socket choice.
    /// Dual-socket operation requires a dual-capable SKU.
    pub fn with_cpu(&self, cpu: Cpu, dual_cpu: bool) -> Result<Self, SelectionError> {
        if dual_cpu && !cpu.dual_capable {
            return Err(SelectionError::DualSocketUnsupported { model: cpu.model });
        }

        let mut next = self.clone();
        next.cpu = Some(cpu);
        next.dual_cpu = dual_cpu;
        Ok(next)
    }

    #[must_use]
    pub fn without_cpu(&self) -> Self {
        let mut next = self.clone();
        next.cpu = None;
        next.dual_cpu = false;
        next
    }

    /// Set the quantity for a GPU model.
    ///
    /// The requested quantity clamps to `[0, max_quantity]` for the
    /// chassis chosen so far; zero removes the model from the selection.
    /// Requesting a second distinct model while the current one has any
    /// quantity is rejected with the selection unchanged.
    pub fn with_gpu_quantity(&self, gpu: &Gpu, quantity: u32) -> Result<Self, SelectionError> {
        if quantity > 0
            && let Some(selected) = self.gpu.first()
            && selected.gpu.model != gpu.model
        {
            return Err(SelectionError::MixedGpuModels {
                selected: selected.gpu.model.clone(),
                requested: gpu.model.clone(),
            });
        }

        let clamped = quantity.min(gpu::max_quantity(gpu, self.chassis.as_ref()));

        let mut next = self.clone();
        next.gpu.retain(|entry| entry.gpu.id != gpu.id);
        if clamped > 0 {
            next.gpu.push(GpuSelection {
                gpu: gpu.clone(),
                quantity: clamped,
            });
        }
        Ok(next)
    }

    /// Add one physical drive.
    ///
    /// Only the total-bay ceiling is enforced eagerly; the per-class
    /// NVMe/LFF/overflow rules are evaluated by the chassis filter over
    /// whole selections. Without a chassis the selection is unbounded.
    pub fn add_drive(&self, drive: Storage) -> Result<Self, SelectionError> {
        if let Some(chassis) = &self.chassis {
            let occupied = u32::try_from(self.storage.len()).unwrap_or(u32::MAX);
            if occupied >= chassis.drive_bays {
                return Err(SelectionError::DriveBaysExhausted {
                    capacity: chassis.drive_bays,
                });
            }
        }

        let mut next = self.clone();
        next.storage.push(drive);
        Ok(next)
    }

    /// Remove one physical instance of a drive SKU. Removing a SKU that
    /// is not selected is a no-op.
    #[must_use]
    pub fn remove_drive(&self, id: u32) -> Self {
        let mut next = self.clone();
        if let Some(index) = next.storage.iter().position(|drive| drive.id == id) {
            next.storage.remove(index);
        }
        next
    }

    #[must_use]
    pub fn with_ram(&self, ram: Ram) -> Self {
        let mut next = self.clone();
        next.ram = Some(ram);
        next
    }

    #[must_use]
    pub fn without_ram(&self) -> Self {
        let mut next = self.clone();
        next.ram = None;
        next
    }

    #[must_use]
    pub fn with_chassis(&self, chassis: Chassis) -> Self {
        let mut next = self.clone();
        next.chassis = Some(chassis);
        next
    }

    #[must_use]
    pub fn without_chassis(&self) -> Self {
        let mut next = self.clone();
        next.chassis = None;
        next
    }

    /// Set the lease-to-own flag. Turning it on clears a selected
    /// chassis that is not LTO-qualified.
    #[must_use]
    pub fn with_lto(&self, lto: bool) -> Self {
        let mut next = self.clone();
        next.lto = lto;
        if lto
            && let Some(chassis) = &next.chassis
            && !chassis.is_lto_compatible
        {
            next.chassis = None;
        }
        next
    }

    /// Combined thermal draw in watts. Storage and RAM are excluded from
    /// this model by design.
    #[must_use]
    pub fn total_power(&self) -> u32 {
        let cpu_draw = self
            .cpu
            .as_ref()
            .map_or(0, |cpu| cpu.tdp * if self.dual_cpu { 2 } else { 1 });
        let gpu_draw: u32 = self
            .gpu
            .iter()
            .map(|entry| entry.gpu.tdp * entry.quantity)
            .sum();

        cpu_draw + gpu_draw
    }

    /// The chassis-filter view of this configuration.
    #[must_use]
    pub fn constraints(&self) -> ChassisConstraints<'_> {
        ChassisConstraints {
            cpu: self.cpu.as_ref(),
            dual_cpu: self.dual_cpu,
            gpus: &self.gpu,
            storage: &self.storage,
            total_power_watts: f64::from(self.total_power()),
            lto: self.lto,
        }
    }

    /// Model of the currently selected GPU, if any.
    #[must_use]
    pub fn gpu_model(&self) -> Option<&str> {
        self.gpu.first().map(|entry| entry.gpu.model.as_str())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu(model: &str, dual_capable: bool) -> Cpu {
        Cpu {
            id: 1,
            model: model.to_string(),
            manufacturer: "AMD".to_string(),
            cores: 64,
            threads: 128,
            base_speed: 2.0,
            boost_speed: 3.5,
            tdp: 200,
            price: 4000.0,
            generation: "Milan".to_string(),
            socket: "SP3".to_string(),
            dual_capable,
        }
    }

    fn gpu(id: u32, model: &str, tdp: u32) -> Gpu {
        Gpu {
            id,
            model: model.to_string(),
            manufacturer: "NVIDIA".to_string(),
            vram: 16,
            tdp,
            price: 900.0,
            form_factor: "Single Slot".to_string(),
            length: 241,
            supplementary_power: false,
        }
    }

    fn drive(id: u32) -> Storage {
        Storage {
            id,
            model: "test-drive".to_string(),
            kind: "SSD".to_string(),
            form_factor: "SFF".to_string(),
            capacity: 960,
            interface: "SATA".to_string(),
            price: 120.0,
            read_speed: 550,
            write_speed: 520,
            rpm: None,
        }
    }

    fn small_chassis(bays: u32) -> Chassis {
        Chassis {
            id: 1,
            model: "test-chassis".to_string(),
            manufacturer: "Test".to_string(),
            form_factor: "1U".to_string(),
            drive_bays: bays,
            max_nvme_drives: 0,
            max_sff_drives: bays,
            max_lff_drives: 0,
            max_gpu_slots: 2,
            max_power_supply: 750,
            max_tdp: 600,
            max_gpu_length: 0,
            price: 800.0,
            multi_node: false,
            compatible_cpus: vec![],
            compatible_gpus: vec![],
            is_lto_compatible: false,
        }
    }

    #[test]
    fn dual_socket_requires_a_dual_capable_cpu() {
        let config = Configuration::new();

        let err = config.with_cpu(cpu("EPYC 7713P", false), true).unwrap_err();
        assert_eq!(
            err,
            SelectionError::DualSocketUnsupported {
                model: "EPYC 7713P".to_string()
            }
        );

        let config = config.with_cpu(cpu("EPYC 7713", true), true).unwrap();
        assert!(config.dual_cpu);
    }

    #[test]
    fn mixing_gpu_models_is_rejected_and_state_kept() {
        let config = Configuration::new()
            .with_gpu_quantity(&gpu(1, "RTX A4000", 140), 2)
            .unwrap();

        let err = config
            .with_gpu_quantity(&gpu(2, "RTX 3090", 350), 1)
            .unwrap_err();
        assert_eq!(
            err,
            SelectionError::MixedGpuModels {
                selected: "RTX A4000".to_string(),
                requested: "RTX 3090".to_string(),
            }
        );
        assert_eq!(config.gpu_model(), Some("RTX A4000"));
        assert_eq!(config.gpu[0].quantity, 2);
    }

    #[test]
    fn gpu_quantity_clamps_to_the_model_ceiling() {
        let config = Configuration::new()
            .with_gpu_quantity(&gpu(1, "RTX A4000", 140), 20)
            .unwrap();
        assert_eq!(config.gpu[0].quantity, 8);

        let config = Configuration::new()
            .with_gpu_quantity(&gpu(3, "Tesla P4", 75), 5)
            .unwrap();
        assert_eq!(config.gpu[0].quantity, 1);
    }

    #[test]
    fn zero_quantity_removes_the_model_entirely() {
        let a4000 = gpu(1, "RTX A4000", 140);
        let config = Configuration::new().with_gpu_quantity(&a4000, 2).unwrap();
        let config = config.with_gpu_quantity(&a4000, 0).unwrap();

        assert!(config.gpu.is_empty());
        // With the list empty a different model is no longer mixing.
        assert!(
            config
                .with_gpu_quantity(&gpu(2, "RTX 3090", 350), 1)
                .is_ok()
        );
    }

    #[test]
    fn unresolvable_models_clamp_to_nothing() {
        let config = Configuration::new()
            .with_gpu_quantity(&gpu(9, "H100", 700), 4)
            .unwrap();
        assert!(config.gpu.is_empty());
    }

    #[test]
    fn add_drive_guards_the_total_bay_ceiling_eagerly() {
        let config = Configuration::new().with_chassis(small_chassis(2));
        let config = config.add_drive(drive(1)).unwrap();
        let config = config.add_drive(drive(1)).unwrap();

        let err = config.add_drive(drive(2)).unwrap_err();
        assert_eq!(err, SelectionError::DriveBaysExhausted { capacity: 2 });
        assert_eq!(config.storage.len(), 2);
    }

    #[test]
    fn drives_are_unbounded_without_a_chassis() {
        let mut config = Configuration::new();
        for _ in 0..40 {
            config = config.add_drive(drive(1)).unwrap();
        }
        assert_eq!(config.storage.len(), 40);
    }

    #[test]
    fn remove_drive_takes_one_physical_instance() {
        let config = Configuration::new()
            .add_drive(drive(1))
            .unwrap()
            .add_drive(drive(1))
            .unwrap();

        let config = config.remove_drive(1);
        assert_eq!(config.storage.len(), 1);

        let config = config.remove_drive(42);
        assert_eq!(config.storage.len(), 1);
    }

    #[test]
    fn enabling_lto_clears_an_unqualified_chassis() {
        let config = Configuration::new().with_chassis(small_chassis(4));
        let config = config.with_lto(true);
        assert!(config.chassis.is_none());
        assert!(config.lto);

        let mut qualified = small_chassis(4);
        qualified.is_lto_compatible = true;
        let config = Configuration::new().with_chassis(qualified).with_lto(true);
        assert!(config.chassis.is_some());
    }

    #[test]
    fn total_power_doubles_the_cpu_for_dual_socket() {
        let config = Configuration::new()
            .with_cpu(cpu("EPYC 7713", true), true)
            .unwrap()
            .with_gpu_quantity(&gpu(1, "RTX A4000", 140), 4)
            .unwrap();

        assert_eq!(config.total_power(), 200 * 2 + 140 * 4);
    }

    #[test]
    fn serializes_with_the_wizard_field_names() {
        let value = serde_json::to_value(Configuration::new()).unwrap();
        assert!(value.get("isDualCPU").is_some());
        assert!(value.get("isLTO").is_some());
        assert!(value.get("storage").is_some());
    }
}
