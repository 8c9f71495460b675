use crate::family::CpuFamily;
use serde::{Deserialize, Serialize};

///
/// Cpu
///
/// A processor SKU. `generation` is the tag RAM rows reference through
/// their `compatibleWith` lists; the chassis-facing family tag is derived
/// from the model string via [`CpuFamily::classify`].
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    pub id: u32,
    pub model: String,
    pub manufacturer: String,
    pub cores: u32,
    pub threads: u32,
    pub base_speed: f64,
    pub boost_speed: f64,
    pub tdp: u32,
    pub price: f64,
    pub generation: String,
    pub socket: String,
    pub dual_capable: bool,
}

impl Cpu {
    #[must_use]
    pub fn family(&self) -> CpuFamily {
        CpuFamily::classify(&self.model)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_row_deserializes_from_wire_names() {
        let row = serde_json::json!({
            "id": 3,
            "model": "EPYC 7713",
            "manufacturer": "AMD",
            "cores": 64,
            "threads": 128,
            "baseSpeed": 2.0,
            "boostSpeed": 3.675,
            "tdp": 225,
            "price": 4500.0,
            "generation": "Milan",
            "socket": "SP3",
            "dualCapable": true
        });

        let cpu: Cpu = serde_json::from_value(row).unwrap();
        assert_eq!(cpu.threads, 128);
        assert_eq!(cpu.family(), CpuFamily::Epyc7003);
    }
}
