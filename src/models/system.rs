// Static-ish host and CPU identity, captured once per sampling tick

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInfo {
    pub hostname: String,
    pub uptime: u64,
    pub boot_time: u64,
    /// Number of processes visible at capture time.
    pub procs: u64,
    /// ex: freebsd, linux
    pub os: String,
    /// ex: ubuntu, linuxmint
    pub platform: String,
    /// ex: debian, rhel
    pub platform_family: String,
    pub platform_version: String,
    pub kernel_version: String,
    pub kernel_arch: String,
    pub virtualization_system: String,
    /// guest or host
    pub virtualization_role: String,
    pub host_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuIdentity {
    pub cpu: i64,
    pub vendor_id: String,
    pub family: String,
    pub model: String,
    pub stepping: i64,
    pub physical_id: String,
    pub core_id: String,
    pub cores: i64,
    pub model_name: String,
    pub mhz: f64,
    pub cache_size: i64,
    pub flags: Vec<String>,
    pub microcode: String,
}

/// One snapshot of host + CPU identity. Partial provider failure leaves the
/// fields that did succeed populated; the rest stay at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInformation {
    pub host: HostInfo,
    pub cpu: CpuIdentity,
}
