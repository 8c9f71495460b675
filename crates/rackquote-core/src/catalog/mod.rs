//! Immutable catalog value types.
//!
//! Rows are flat records matching the catalog provider's JSON shape; the
//! wire field names are the provider's camelCase spellings. The engine
//! never mutates a catalog row; rows are cloned into a configuration as
//! the user advances through selection steps.

mod chassis;
mod cpu;
mod gpu;
mod ram;
mod storage;

pub use chassis::Chassis;
pub use cpu::Cpu;
pub use gpu::{Gpu, GpuSelection};
pub use ram::Ram;
pub use storage::Storage;
