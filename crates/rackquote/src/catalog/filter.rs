use rackquote_core::catalog::{Cpu, Gpu, Ram, Storage};
use serde::{Deserialize, Serialize};

///
/// CpuFilter
///
/// Optional row predicates for CPU listings. `None` fields match
/// everything, so the default filter lists the whole catalog.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuFilter {
    pub manufacturer: Option<String>,
    pub min_cores: Option<u32>,
    pub max_tdp: Option<u32>,
    pub min_threads: Option<u32>,
    pub max_price: Option<f64>,
}

impl CpuFilter {
    #[must_use]
    pub fn matches(&self, cpu: &Cpu) -> bool {
        self.manufacturer
            .as_ref()
            .is_none_or(|m| &cpu.manufacturer == m)
            && self.min_cores.is_none_or(|n| cpu.cores >= n)
            && self.max_tdp.is_none_or(|w| cpu.tdp <= w)
            && self.min_threads.is_none_or(|n| cpu.threads >= n)
            && self.max_price.is_none_or(|p| cpu.price <= p)
    }
}

///
/// GpuFilter
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuFilter {
    pub manufacturer: Option<String>,
    pub min_vram: Option<u32>,
    pub max_tdp: Option<u32>,
    pub max_length: Option<u32>,
    pub max_price: Option<f64>,
}

impl GpuFilter {
    #[must_use]
    pub fn matches(&self, gpu: &Gpu) -> bool {
        self.manufacturer
            .as_ref()
            .is_none_or(|m| &gpu.manufacturer == m)
            && self.min_vram.is_none_or(|v| gpu.vram >= v)
            && self.max_tdp.is_none_or(|w| gpu.tdp <= w)
            && self.max_length.is_none_or(|l| gpu.length <= l)
            && self.max_price.is_none_or(|p| gpu.price <= p)
    }
}

///
/// RamFilter
///
/// `cpu_generation` narrows kits to those qualified for the selected
/// CPU's generation tag.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RamFilter {
    pub cpu_generation: Option<String>,
    pub min_capacity: Option<u32>,
}

impl RamFilter {
    #[must_use]
    pub fn matches(&self, ram: &Ram) -> bool {
        self.cpu_generation
            .as_ref()
            .is_none_or(|generation| ram.supports_generation(generation))
            && self.min_capacity.is_none_or(|c| ram.capacity >= c)
    }
}

///
/// StorageFilter
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub form_factor: Option<String>,
    pub interface: Option<String>,
    pub min_capacity: Option<u32>,
}

impl StorageFilter {
    #[must_use]
    pub fn matches(&self, drive: &Storage) -> bool {
        self.kind.as_ref().is_none_or(|k| &drive.kind == k)
            && self
                .form_factor
                .as_ref()
                .is_none_or(|f| &drive.form_factor == f)
            && self.interface.as_ref().is_none_or(|i| &drive.interface == i)
            && self.min_capacity.is_none_or(|c| drive.capacity >= c)
    }
}
