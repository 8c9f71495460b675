
use crate::catalog::{Chassis, Storage};

pub(super) fn drive(form_factor: &str, interface: &str) -> Storage {
    Storage {
        id: 1,
        model: "test-drive".to_string(),
        kind: "SSD".to_string(),
        form_factor: form_factor.to_string(),
        capacity: 960,
        interface: interface.to_string(),
        price: 120.0,
        read_speed: 550,
        write_speed: 520,
        rpm: None,
    }
}

pub(super) fn chassis(total: u32, nvme: u32, sff: u32, lff: u32) -> Chassis {
    Chassis {
        id: 1,
        model: "test-chassis".to_string(),
        manufacturer: "Test".to_string(),
        form_factor: "2U".to_string(),
        drive_bays: total,
        max_nvme_drives: nvme,
        max_sff_drives: sff,
        max_lff_drives: lff,
        max_gpu_slots: 0,
        max_power_supply: 1200,
        max_tdp: 800,
        max_gpu_length: 0,
        price: 1000.0,
        multi_node: false,
        compatible_cpus: vec![],
        compatible_gpus: vec![],
        is_lto_compatible: false,
    }
}

pub(super) fn selection(nvme: u32, sff: u32, lff: u32) -> Vec<Storage> {
    let mut drives = Vec::new();
    for _ in 0..nvme {
        drives.push(drive("SFF", "U.2"));
    }
    for _ in 0..sff {
        drives.push(drive("SFF", "SATA"));
    }
    for _ in 0..lff {
        drives.push(drive("LFF", "SATA"));
    }
    drives
}
