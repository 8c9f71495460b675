use crate::catalog::{CpuFilter, GpuFilter, RamFilter, StorageFilter};
use rackquote_core::catalog::{Chassis, Cpu, Gpu, Ram, Storage};

///
/// CatalogSource
///
/// Read-only catalog provider. Each call returns an owned snapshot in
/// the listing's canonical order; the engine never writes back.
///
/// Canonical orders: CPUs, GPUs and chassis by price ascending (the
/// chassis order is what the compatibility filter preserves), RAM by
/// capacity then price, storage by type then capacity.
///

pub trait CatalogSource {
    fn cpus(&self, filter: &CpuFilter) -> Vec<Cpu>;
    fn gpus(&self, filter: &GpuFilter) -> Vec<Gpu>;
    fn ram(&self, filter: &RamFilter) -> Vec<Ram>;
    fn storage(&self, filter: &StorageFilter) -> Vec<Storage>;
    fn chassis(&self) -> Vec<Chassis>;
}

///
/// MemoryCatalog
///
/// A catalog served from plain vectors, in whatever state they were
/// loaded. Sorting happens per listing call.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    cpus: Vec<Cpu>,
    gpus: Vec<Gpu>,
    ram: Vec<Ram>,
    storage: Vec<Storage>,
    chassis: Vec<Chassis>,
}

impl MemoryCatalog {
    #[must_use]
    pub const fn new(
        cpus: Vec<Cpu>,
        gpus: Vec<Gpu>,
        ram: Vec<Ram>,
        storage: Vec<Storage>,
        chassis: Vec<Chassis>,
    ) -> Self {
        Self {
            cpus,
            gpus,
            ram,
            storage,
            chassis,
        }
    }
}

impl CatalogSource for MemoryCatalog {
    fn cpus(&self, filter: &CpuFilter) -> Vec<Cpu> {
        let mut rows: Vec<Cpu> = self
            .cpus
            .iter()
            .filter(|cpu| filter.matches(cpu))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.price.total_cmp(&b.price));
        rows
    }

    fn gpus(&self, filter: &GpuFilter) -> Vec<Gpu> {
        let mut rows: Vec<Gpu> = self
            .gpus
            .iter()
            .filter(|gpu| filter.matches(gpu))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.price.total_cmp(&b.price));
        rows
    }

    fn ram(&self, filter: &RamFilter) -> Vec<Ram> {
        let mut rows: Vec<Ram> = self
            .ram
            .iter()
            .filter(|ram| filter.matches(ram))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.capacity
                .cmp(&b.capacity)
                .then_with(|| a.price.total_cmp(&b.price))
        });
        rows
    }

    fn storage(&self, filter: &StorageFilter) -> Vec<Storage> {
        let mut rows: Vec<Storage> = self
            .storage
            .iter()
            .filter(|drive| filter.matches(drive))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.capacity.cmp(&b.capacity)));
        rows
    }

    fn chassis(&self) -> Vec<Chassis> {
        let mut rows = self.chassis.clone();
        rows.sort_by(|a, b| a.price.total_cmp(&b.price));
        rows
    }
}

///
/// TESTS
///
