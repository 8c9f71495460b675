use serde::{Deserialize, Serialize};

const TERABYTE_DIVISOR: u32 = 1000;

///
/// Storage
///
/// A physical drive SKU. A configuration's storage list holds one entry
/// per installed drive, so the same SKU may appear repeatedly. `kind` is
/// the marketing class (`SSD` | `NVMe` | `HDD`); bay placement is decided
/// by `interface` and `form_factor`, not by `kind`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub id: u32,
    pub model: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub form_factor: String,
    pub capacity: u32,
    pub interface: String,
    pub price: f64,
    pub read_speed: u32,
    pub write_speed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpm: Option<u32>,
}

impl Storage {
    /// Marketing capacity label (1000 divisor, unlike RAM).
    #[must_use]
    pub fn capacity_label(&self) -> String {
        if self.capacity >= TERABYTE_DIVISOR {
            format!("{}TB", self.capacity / TERABYTE_DIVISOR)
        } else {
            format!("{}GB", self.capacity)
        }
    }

    /// Spinning drives advertise rotational speed, everything else
    /// sequential throughput.
    #[must_use]
    pub fn speed_label(&self) -> String {
        if self.kind == "HDD" {
            let rpm = self.rpm.unwrap_or(0);
            format!("{rpm} RPM")
        } else {
            format!("R: {}MB/s | W: {}MB/s", self.read_speed, self.write_speed)
        }
    }
}

///
/// TESTS
///
