// Linux-specific readers: /proc/cpuinfo, /proc/stat, /proc/meminfo,
// /proc/<pid>/stat, /sys thermal zones, /etc/machine-id.
//
// Each reader is a thin I/O wrapper over a pure parser so the parsers can be
// exercised on captured file contents. On platforms without /proc the reads
// fail and the caller surfaces that as a provider error.

use crate::models::{CpuIdentity, CpuTimes, MemoryStats, ProcessMetricsAggregate, TemperatureStat};
use anyhow::{Context, anyhow};
use std::path::Path;

/// Kernel USER_HZ; /proc/stat counters are jiffies.
const CLOCK_TICKS_PER_SEC: f64 = 100.0;

pub(super) fn read_cpu_identity() -> anyhow::Result<CpuIdentity> {
    let content =
        std::fs::read_to_string("/proc/cpuinfo").context("read /proc/cpuinfo for cpu identity")?;
    parse_cpu_identity(&content)
}

pub(super) fn read_cpu_times() -> anyhow::Result<CpuTimes> {
    let content = std::fs::read_to_string("/proc/stat").context("read /proc/stat for cpu times")?;
    parse_cpu_times(&content)
}

pub(super) fn read_meminfo() -> anyhow::Result<MemoryStats> {
    let content =
        std::fs::read_to_string("/proc/meminfo").context("read /proc/meminfo for memory stats")?;
    Ok(parse_meminfo(&content))
}

/// First readable thermal zone, or None when the host exposes no sensors
/// (absence is not a read failure).
pub(super) fn read_thermal() -> anyhow::Result<Option<TemperatureStat>> {
    let zones = match std::fs::read_dir("/sys/class/thermal") {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(anyhow!("read /sys/class/thermal: {e}")),
    };
    let mut names: Vec<_> = zones
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("thermal_zone"))
        })
        .collect();
    names.sort();
    for zone in names {
        let Ok(raw) = std::fs::read_to_string(zone.join("temp")) else {
            continue;
        };
        let Ok(millidegrees) = raw.trim().parse::<f64>() else {
            continue;
        };
        let sensor_key = std::fs::read_to_string(zone.join("type"))
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        return Ok(Some(TemperatureStat {
            sensor_key,
            temperature: millidegrees / 1000.0,
            high: 0.0,
            critical: 0.0,
        }));
    }
    Ok(None)
}

/// Host id from /etc/machine-id (Linux).
pub(super) fn read_machine_id() -> Option<String> {
    let id = std::fs::read_to_string("/etc/machine-id").ok()?;
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

/// Best-effort virtualization detection: container marker first, then the
/// hypervisor type exposed under /sys.
pub(super) fn read_virtualization() -> (String, String) {
    if Path::new("/.dockerenv").exists() {
        return ("docker".into(), "guest".into());
    }
    if let Ok(kind) = std::fs::read_to_string("/sys/hypervisor/type") {
        let kind = kind.trim();
        if !kind.is_empty() {
            return (kind.to_string(), "guest".into());
        }
    }
    (String::new(), String::new())
}

/// Walk /proc/<pid>/stat for state, thread and foreground/background counts,
/// and /proc/<pid>/fd for open descriptors. Processes that vanish mid-walk or
/// deny access are skipped.
pub(super) fn read_process_table() -> anyhow::Result<ProcessMetricsAggregate> {
    let entries = std::fs::read_dir("/proc").context("read /proc for process table")?;
    let mut metrics = ProcessMetricsAggregate::default();
    for entry in entries.filter_map(|e| e.ok()) {
        let name = entry.file_name();
        let Some(pid) = name.to_str().filter(|n| n.bytes().all(|b| b.is_ascii_digit())) else {
            continue;
        };
        let Ok(stat) = std::fs::read_to_string(format!("/proc/{pid}/stat")) else {
            continue;
        };
        let Some(parsed) = parse_pid_stat(&stat) else {
            continue;
        };
        metrics.proc_count += 1;
        metrics.thread_count += parsed.threads;
        if parsed.foreground {
            metrics.proc_foreground += 1;
        } else {
            metrics.proc_background += 1;
        }
        match parsed.state {
            'R' => metrics.proc_running += 1,
            'S' => metrics.proc_sleeping += 1,
            'T' | 't' => metrics.proc_stopped += 1,
            'I' => metrics.proc_idle += 1,
            'Z' => metrics.proc_zombie += 1,
            'D' | 'W' => metrics.proc_waiting += 1,
            'L' => metrics.proc_locked += 1,
            _ => {}
        }
        if let Ok(fds) = std::fs::read_dir(format!("/proc/{pid}/fd")) {
            metrics.open_files += fds.filter(|e| e.is_ok()).count() as u64;
        }
    }
    Ok(metrics)
}

pub(super) struct PidStat {
    pub state: char,
    pub threads: u64,
    /// A process whose group owns the controlling terminal counts as
    /// foreground; everything else is background.
    pub foreground: bool,
}

/// Parse one /proc/<pid>/stat line. The comm field may contain spaces and
/// parentheses, so fields are taken after the last ')'.
pub(super) fn parse_pid_stat(content: &str) -> Option<PidStat> {
    let rest = &content[content.rfind(')')? + 1..];
    let fields: Vec<&str> = rest.split_whitespace().collect();
    // After comm: 0=state 1=ppid 2=pgrp 3=session 4=tty_nr 5=tpgid ... 17=num_threads
    let state = fields.first()?.chars().next()?;
    let pgrp: i64 = fields.get(2)?.parse().ok()?;
    let tpgid: i64 = fields.get(5)?.parse().ok()?;
    let threads: u64 = fields.get(17)?.parse().ok()?;
    Some(PidStat {
        state,
        threads,
        foreground: tpgid != -1 && pgrp == tpgid,
    })
}

/// First processor block of /proc/cpuinfo.
pub(super) fn parse_cpu_identity(content: &str) -> anyhow::Result<CpuIdentity> {
    let mut id = CpuIdentity::default();
    let mut seen_processor = false;
    for line in content.lines() {
        if line.trim().is_empty() {
            if seen_processor {
                break;
            }
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "processor" => {
                seen_processor = true;
                id.cpu = value.parse().unwrap_or_default();
            }
            "vendor_id" => id.vendor_id = value.to_string(),
            "cpu family" => id.family = value.to_string(),
            "model" => id.model = value.to_string(),
            "model name" => id.model_name = value.to_string(),
            "stepping" => id.stepping = value.parse().unwrap_or_default(),
            "physical id" => id.physical_id = value.to_string(),
            "core id" => id.core_id = value.to_string(),
            "cpu cores" => id.cores = value.parse().unwrap_or_default(),
            "cpu MHz" => id.mhz = value.parse().unwrap_or_default(),
            "cache size" => {
                // ex: "12288 KB"
                id.cache_size = value
                    .split_whitespace()
                    .next()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_default();
            }
            "flags" => id.flags = value.split_whitespace().map(str::to_string).collect(),
            "microcode" => id.microcode = value.to_string(),
            _ => {}
        }
    }
    if !seen_processor {
        return Err(anyhow!("no processor block in /proc/cpuinfo"));
    }
    Ok(id)
}

/// Aggregate "cpu " line of /proc/stat, jiffies converted to seconds.
pub(super) fn parse_cpu_times(content: &str) -> anyhow::Result<CpuTimes> {
    let line = content
        .lines()
        .find(|l| l.starts_with("cpu "))
        .ok_or_else(|| anyhow!("no aggregate cpu line in /proc/stat"))?;
    let mut fields = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse::<u64>().unwrap_or(0) as f64 / CLOCK_TICKS_PER_SEC);
    let mut next = || fields.next().unwrap_or(0.0);
    // Order per proc(5): user nice system idle iowait irq softirq steal guest guest_nice
    let user = next();
    let nice = next();
    let system = next();
    let idle = next();
    let iowait = next();
    let irq = next();
    let softirq = next();
    let steal = next();
    let guest = next();
    let guest_nice = next();
    Ok(CpuTimes {
        user,
        system,
        idle,
        nice,
        iowait,
        irq,
        softirq,
        steal,
        guest,
        guest_nice,
    })
}

/// /proc/meminfo counters; kB values scaled to bytes, bare values (the
/// huge-page counts) kept as counts. Unknown keys are ignored.
pub(super) fn parse_meminfo(content: &str) -> MemoryStats {
    let mut mem = MemoryStats::default();
    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let rest = rest.trim();
        let mut parts = rest.split_whitespace();
        let Some(value) = parts.next().and_then(|v| v.parse::<u64>().ok()) else {
            continue;
        };
        let value = match parts.next() {
            Some("kB") => value * 1024,
            _ => value,
        };
        match key.trim() {
            "MemTotal" => mem.total = value,
            "MemAvailable" => mem.available = value,
            "MemFree" => mem.free = value,
            "Active" => mem.active = value,
            "Inactive" => mem.inactive = value,
            "Buffers" => mem.buffers = value,
            "Cached" => mem.cached = value,
            "Writeback" => mem.write_back = value,
            "Dirty" => mem.dirty = value,
            "Shmem" => mem.shared = value,
            "Slab" => mem.slab = value,
            "SReclaimable" => mem.sreclaimable = value,
            "SUnreclaim" => mem.sunreclaim = value,
            "PageTables" => mem.page_tables = value,
            "SwapCached" => mem.swap_cached = value,
            "CommitLimit" => mem.commit_limit = value,
            "Committed_AS" => mem.committed_as = value,
            "SwapTotal" => mem.swap_total = value,
            "SwapFree" => mem.swap_free = value,
            "Mapped" => mem.mapped = value,
            "VmallocTotal" => mem.vmalloc_total = value,
            "VmallocUsed" => mem.vmalloc_used = value,
            "VmallocChunk" => mem.vmalloc_chunk = value,
            "HugePages_Total" => mem.huge_pages_total = value,
            "HugePages_Free" => mem.huge_pages_free = value,
            "HugePages_Rsvd" => mem.huge_pages_rsvd = value,
            "HugePages_Surp" => mem.huge_pages_surp = value,
            "Hugepagesize" => mem.huge_page_size = value,
            "AnonHugePages" => mem.anon_huge_pages = value,
            _ => {}
        }
    }
    mem.used = mem
        .total
        .saturating_sub(mem.free)
        .saturating_sub(mem.buffers)
        .saturating_sub(mem.cached);
    if mem.total > 0 {
        mem.used_percent = mem.used as f64 / mem.total as f64 * 100.0;
    }
    mem
}
