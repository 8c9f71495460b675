use serde::{Deserialize, Serialize};

///
/// Gpu
///
/// An accelerator SKU. Compatibility identity is the `model` string, not
/// `id`: chassis rows reference models in their `compatibleGPUs` lists.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gpu {
    pub id: u32,
    pub model: String,
    pub manufacturer: String,
    pub vram: u32,
    pub tdp: u32,
    pub price: f64,
    pub form_factor: String,
    pub length: u32,
    pub supplementary_power: bool,
}

///
/// GpuSelection
///
/// One GPU model at a chosen quantity. A configuration holds at most one
/// distinct model across its selections.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GpuSelection {
    pub gpu: Gpu,
    pub quantity: u32,
}
