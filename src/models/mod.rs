// Payload models for the three metric families

mod metrics;
mod process;
mod system;

pub use metrics::{CpuTimes, MemoryStats, SystemMetricsBasic, TemperatureStat};
pub use process::ProcessMetricsAggregate;
pub use system::{CpuIdentity, HostInfo, SystemInformation};
