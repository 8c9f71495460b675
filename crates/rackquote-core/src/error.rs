use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// SelectionError
///
/// A requested configuration transition that violates an actively
/// enforced invariant. Always recoverable: transitions take `&self` and
/// return a fresh value, so a rejected request leaves the caller's
/// configuration exactly as it was.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[remain::sorted]
pub enum SelectionError {
    /// The selected chassis has no free drive bay for another drive.
    /// Only the total-bay ceiling is enforced per increment; the finer
    /// NVMe/LFF/overflow split is evaluated against whole selections.
    #[error("all {capacity} drive bays are in use")]
    DriveBaysExhausted { capacity: u32 },

    /// Dual-socket operation requested for a CPU that is not dual
    /// capable.
    #[error("{model} does not support dual-socket operation")]
    DualSocketUnsupported { model: String },

    /// A configuration holds at most one distinct GPU model at a time.
    #[error("cannot mix GPU models: {selected} is already selected, remove it before adding {requested}")]
    MixedGpuModels { selected: String, requested: String },
}
