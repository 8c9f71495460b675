use serde::{Deserialize, Serialize};

///
/// Chassis
///
/// An enclosure SKU. `compatible_cpus` holds CPU *family* tags (see
/// [`crate::family::CpuFamily`]), while `compatible_gpus` holds GPU model
/// strings. `drive_bays` is the advertised total; the three per-class
/// maxima are what the bay allocator actually works from, and a mismatch
/// between the total and their sum is a data-quality finding, not a
/// runtime error (see [`crate::audit`]).
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chassis {
    pub id: u32,
    pub model: String,
    pub manufacturer: String,
    pub form_factor: String,
    pub drive_bays: u32,
    pub max_nvme_drives: u32,
    pub max_sff_drives: u32,
    pub max_lff_drives: u32,
    #[serde(rename = "maxGPUSlots")]
    pub max_gpu_slots: u32,
    pub max_power_supply: u32,
    #[serde(rename = "maxTDP")]
    pub max_tdp: u32,
    #[serde(rename = "maxGPULength")]
    pub max_gpu_length: u32,
    pub price: f64,
    pub multi_node: bool,
    #[serde(rename = "compatibleCPUs")]
    pub compatible_cpus: Vec<String>,
    #[serde(rename = "compatibleGPUs")]
    pub compatible_gpus: Vec<String>,
    pub is_lto_compatible: bool,
}

impl Chassis {
    #[must_use]
    pub fn supports_cpu_family(&self, family_tag: &str) -> bool {
        self.compatible_cpus.iter().any(|tag| tag == family_tag)
    }

    #[must_use]
    pub fn supports_gpu_model(&self, model: &str) -> bool {
        self.compatible_gpus.iter().any(|m| m == model)
    }

    /// Sum of the per-class bay maxima. Should equal `drive_bays`; the
    /// allocator never relies on that holding.
    #[must_use]
    pub const fn bay_class_sum(&self) -> u32 {
        self.max_nvme_drives + self.max_sff_drives + self.max_lff_drives
    }
}

///
/// TESTS
///
