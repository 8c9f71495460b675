use serde::{Deserialize, Serialize};

const TERABYTE_DIVISOR: u32 = 1024;

///
/// Ram
///
/// A memory kit. `compatible_with` lists the CPU generation tags the kit
/// is qualified for; capacity is in gigabytes.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ram {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub capacity: u32,
    pub speed: u32,
    pub price: f64,
    pub generation: String,
    pub ecc: bool,
    pub compatible_with: Vec<String>,
}

impl Ram {
    /// Human-readable capacity. Memory uses a 1024 divisor, unlike
    /// storage marketing sizes.
    #[must_use]
    pub fn capacity_label(&self) -> String {
        if self.capacity >= TERABYTE_DIVISOR {
            format!("{}TB", self.capacity / TERABYTE_DIVISOR)
        } else {
            format!("{}GB", self.capacity)
        }
    }

    #[must_use]
    pub fn supports_generation(&self, generation: &str) -> bool {
        self.compatible_with.iter().any(|tag| tag == generation)
    }
}

///
/// TESTS
///
