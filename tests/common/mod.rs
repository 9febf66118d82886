// Shared test helpers: fully-populated sample payloads and a scriptable
// provider.

use sysmon::metrics::{MetricsProvider, ProviderResult};
use sysmon::models::*;

pub fn sample_system_information() -> SystemInformation {
    SystemInformation {
        host: HostInfo {
            hostname: "testhost".into(),
            uptime: 86_400,
            boot_time: 1_700_000_000,
            procs: 321,
            os: "linux".into(),
            platform: "ubuntu".into(),
            platform_family: "debian".into(),
            platform_version: "24.04".into(),
            kernel_version: "6.8.0-45-generic".into(),
            kernel_arch: "x86_64".into(),
            virtualization_system: "kvm".into(),
            virtualization_role: "guest".into(),
            host_id: "8a5f1d2c-1111-2222-3333-444455556666".into(),
        },
        cpu: CpuIdentity {
            cpu: 0,
            vendor_id: "GenuineIntel".into(),
            family: "6".into(),
            model: "158".into(),
            stepping: 10,
            physical_id: "0".into(),
            core_id: "0".into(),
            cores: 6,
            model_name: "Intel(R) Core(TM) i7-8700".into(),
            mhz: 3192.0,
            cache_size: 12_288,
            flags: vec!["fpu".into(), "vme".into(), "sse2".into()],
            microcode: "0xde".into(),
        },
    }
}

pub fn sample_basic_metrics() -> SystemMetricsBasic {
    SystemMetricsBasic {
        cpu: CpuTimes {
            user: 87.5,
            system: 31.25,
            idle: 940.0,
            nice: 2.0,
            iowait: 4.5,
            irq: 0.25,
            softirq: 1.5,
            steal: 0.75,
            guest: 0.5,
            guest_nice: 0.125,
        },
        memory: MemoryStats {
            total: 16 * 1024 * 1024 * 1024,
            available: 8 * 1024 * 1024 * 1024,
            used: 6 * 1024 * 1024 * 1024,
            used_percent: 37.5,
            free: 4 * 1024 * 1024 * 1024,
            active: 3_000_000_000,
            inactive: 2_000_000_000,
            buffers: 500_000_000,
            cached: 1_500_000_000,
            write_back: 1024,
            dirty: 2048,
            shared: 300_000_000,
            slab: 400_000_000,
            sreclaimable: 350_000_000,
            sunreclaim: 50_000_000,
            page_tables: 60_000_000,
            swap_cached: 0,
            commit_limit: 10_000_000_000,
            committed_as: 9_000_000_000,
            swap_total: 2_000_000_000,
            swap_free: 2_000_000_000,
            mapped: 700_000_000,
            vmalloc_total: 35_184_372_087_808,
            vmalloc_used: 50_000_000,
            vmalloc_chunk: 0,
            huge_pages_total: 4,
            huge_pages_free: 4,
            huge_pages_rsvd: 0,
            huge_pages_surp: 0,
            huge_page_size: 2 * 1024 * 1024,
            anon_huge_pages: 0,
        },
        temps: TemperatureStat {
            sensor_key: "x86_pkg_temp".into(),
            temperature: 48.5,
            high: 80.0,
            critical: 100.0,
        },
    }
}

pub fn sample_process_metrics() -> ProcessMetricsAggregate {
    ProcessMetricsAggregate {
        proc_count: 312,
        thread_count: 1_204,
        proc_foreground: 12,
        proc_background: 300,
        proc_running: 3,
        proc_sleeping: 290,
        proc_stopped: 1,
        proc_idle: 15,
        proc_zombie: 2,
        proc_waiting: 1,
        proc_locked: 0,
        open_files: 8_432,
    }
}

/// Provider returning the sample payloads, with scriptable per-operation
/// error lists. A non-empty list makes the sampler suppress that snapshot.
#[derive(Default)]
pub struct FakeProvider {
    pub system_information_errors: Vec<String>,
    pub basic_metrics_errors: Vec<String>,
    pub process_metrics_errors: Vec<String>,
}

fn to_errors(messages: &[String]) -> Vec<anyhow::Error> {
    messages.iter().map(|m| anyhow::anyhow!(m.clone())).collect()
}

impl MetricsProvider for FakeProvider {
    fn system_information(&self) -> ProviderResult<SystemInformation> {
        (
            sample_system_information(),
            to_errors(&self.system_information_errors),
        )
    }

    fn basic_metrics(&self) -> ProviderResult<SystemMetricsBasic> {
        (sample_basic_metrics(), to_errors(&self.basic_metrics_errors))
    }

    fn process_metrics(&self) -> ProviderResult<ProcessMetricsAggregate> {
        (
            sample_process_metrics(),
            to_errors(&self.process_metrics_errors),
        )
    }
}
