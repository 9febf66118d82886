// Metrics providers. Each operation returns a best-effort snapshot plus the
// per-field errors hit along the way; an empty error list means full success.

mod linux;

use crate::models::{ProcessMetricsAggregate, SystemInformation, SystemMetricsBasic};
use std::sync::Mutex;
use sysinfo::{ProcessesToUpdate, System};

/// Snapshot plus per-field errors. Fields read before a failing step stay
/// populated in the snapshot regardless of the error list.
pub type ProviderResult<T> = (T, Vec<anyhow::Error>);

/// The three sampling operations the orchestrator fans out each tick.
/// Implementations are called from blocking tasks and may touch the
/// filesystem freely.
pub trait MetricsProvider: Send + Sync + 'static {
    fn system_information(&self) -> ProviderResult<SystemInformation>;
    fn basic_metrics(&self) -> ProviderResult<SystemMetricsBasic>;
    fn process_metrics(&self) -> ProviderResult<ProcessMetricsAggregate>;
}

/// Production provider: sysinfo for host identity, /proc and /sys for the
/// counters sysinfo does not expose.
pub struct SysinfoMetrics {
    sys: Mutex<System>,
}

impl Default for SysinfoMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoMetrics {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl MetricsProvider for SysinfoMetrics {
    fn system_information(&self) -> ProviderResult<SystemInformation> {
        let mut info = SystemInformation::default();
        let mut errs = Vec::new();

        match self.sys.lock() {
            Ok(mut sys) => {
                sys.refresh_processes(ProcessesToUpdate::All, true);
                info.host.procs = sys.processes().len() as u64;
                // Baseline CPU identity; /proc/cpuinfo refines it below.
                if let Some(cpu) = sys.cpus().first() {
                    info.cpu.vendor_id = cpu.vendor_id().to_string();
                    info.cpu.model_name = cpu.brand().to_string();
                    info.cpu.mhz = cpu.frequency() as f64;
                }
                info.cpu.cores = System::physical_core_count().unwrap_or(0) as i64;
            }
            Err(e) => errs.push(anyhow::anyhow!("sysinfo lock poisoned: {e}")),
        }
        info.host.hostname = System::host_name().unwrap_or_default();
        info.host.uptime = System::uptime();
        info.host.boot_time = System::boot_time();
        info.host.os = std::env::consts::OS.to_string();
        info.host.platform = System::distribution_id();
        info.host.platform_family = System::name().unwrap_or_default();
        info.host.platform_version = System::os_version().unwrap_or_default();
        info.host.kernel_version = System::kernel_version().unwrap_or_default();
        info.host.kernel_arch = System::cpu_arch();
        info.host.host_id = linux::read_machine_id().unwrap_or_default();
        let (virt_system, virt_role) = linux::read_virtualization();
        info.host.virtualization_system = virt_system;
        info.host.virtualization_role = virt_role;

        match linux::read_cpu_identity() {
            Ok(mut cpu) => {
                if cpu.cores == 0 {
                    cpu.cores = info.cpu.cores;
                }
                info.cpu = cpu;
            }
            Err(e) => errs.push(e),
        }
        (info, errs)
    }

    fn basic_metrics(&self) -> ProviderResult<SystemMetricsBasic> {
        let mut metrics = SystemMetricsBasic::default();
        let mut errs = Vec::new();
        match linux::read_cpu_times() {
            Ok(cpu) => metrics.cpu = cpu,
            Err(e) => errs.push(e),
        }
        match linux::read_meminfo() {
            Ok(memory) => metrics.memory = memory,
            Err(e) => errs.push(e),
        }
        match linux::read_thermal() {
            Ok(Some(temps)) => metrics.temps = temps,
            Ok(None) => {}
            Err(e) => errs.push(e),
        }
        (metrics, errs)
    }

    fn process_metrics(&self) -> ProviderResult<ProcessMetricsAggregate> {
        match linux::read_process_table() {
            Ok(metrics) => (metrics, Vec::new()),
            Err(e) => (ProcessMetricsAggregate::default(), vec![e]),
        }
    }
}
