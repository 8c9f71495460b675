//! Storage bay allocation.
//!
//! LFF bays are the more general resource: SFF SATA drives may overflow
//! into them, NVMe drives may not. Evaluation is over the drive multiset,
//! so order never matters.

use crate::catalog::{Chassis, Storage};
use serde::Serialize;

#[cfg(test)]
mod tests;

///
/// DriveClass
///
/// Bay class a drive occupies. U.2 drives need an NVMe-wired bay
/// regardless of their physical form factor.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum DriveClass {
    Lff,
    Nvme,
    SffSata,
}

impl DriveClass {
    #[must_use]
    pub fn of(drive: &Storage) -> Self {
        if drive.interface == "U.2" {
            Self::Nvme
        } else if drive.form_factor == "SFF" {
            Self::SffSata
        } else {
            Self::Lff
        }
    }
}

///
/// BayUsage
///
/// Per-class bay counts for a drive selection, for display alongside a
/// chassis's advertised bay layout.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BayUsage {
    pub sff_sata: u32,
    pub sff_nvme: u32,
    pub lff: u32,
    pub total: u32,
}

/// Tally the selected drives by bay class.
#[must_use]
pub fn bay_usage(drives: &[Storage]) -> BayUsage {
    let mut usage = BayUsage::default();

    for drive in drives {
        match DriveClass::of(drive) {
            DriveClass::Nvme => usage.sff_nvme += 1,
            DriveClass::SffSata => usage.sff_sata += 1,
            DriveClass::Lff => usage.lff += 1,
        }
    }

    usage.total = usage.sff_sata + usage.sff_nvme + usage.lff;
    usage
}

/// Whether the selected drives fit the chassis's bay layout.
///
/// Checked in order: total bay ceiling, dedicated NVMe bays, LFF bays
/// (no substitute), then SFF overflow into whatever LFF bays remain.
/// Boundary-equal cases are accepted throughout.
#[must_use]
pub fn fits(drives: &[Storage], chassis: &Chassis) -> bool {
    let usage = bay_usage(drives);

    if usage.total > chassis.drive_bays {
        return false;
    }
    if usage.sff_nvme > chassis.max_nvme_drives {
        return false;
    }
    if usage.lff > chassis.max_lff_drives {
        return false;
    }

    let lff_bays_remaining = chassis.max_lff_drives - usage.lff;
    let sff_overflow = usage.sff_sata.saturating_sub(chassis.max_sff_drives);

    sff_overflow <= lff_bays_remaining
}
