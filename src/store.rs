// SQLite event store. One append-only table per metric family with the
// payload flattened into prefixed columns, plus events_log and error_log.
// Every table carries the audit columns id / created_at / deleted_at; nothing
// here ever updates or hard-deletes a row.

use crate::models::{
    CpuIdentity, CpuTimes, HostInfo, MemoryStats, ProcessMetricsAggregate, SystemInformation,
    SystemMetricsBasic, TemperatureStat,
};
use serde::Serialize;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

pub struct EventStore {
    pool: SqlitePool,
}

/// Row in events_log: free-text log lines and observed signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogEntry {
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// Row in error_log: stringified provider errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorLogEntry {
    pub source: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCounts {
    pub system_info: i64,
    pub basic_metrics: i64,
    pub process_metrics: i64,
    pub events_log: i64,
    pub error_log: i64,
}

impl EventStore {
    /// Open (and create if missing) the database at `path`. With `drop_db`
    /// set, the existing database files are wiped first.
    pub async fn connect(path: &str, drop_db: bool) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        if drop_db {
            wipe_database_files(path)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new().connect_with(opts).await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS system_info (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at INTEGER NOT NULL,
                deleted_at INTEGER,
                host_hostname TEXT NOT NULL,
                host_uptime INTEGER NOT NULL,
                host_boot_time INTEGER NOT NULL,
                host_procs INTEGER NOT NULL,
                host_os TEXT NOT NULL,
                host_platform TEXT NOT NULL,
                host_platform_family TEXT NOT NULL,
                host_platform_version TEXT NOT NULL,
                host_kernel_version TEXT NOT NULL,
                host_kernel_arch TEXT NOT NULL,
                host_virtualization_system TEXT NOT NULL,
                host_virtualization_role TEXT NOT NULL,
                host_host_id TEXT NOT NULL,
                cpu_index INTEGER NOT NULL,
                cpu_vendor_id TEXT NOT NULL,
                cpu_family TEXT NOT NULL,
                cpu_model TEXT NOT NULL,
                cpu_stepping INTEGER NOT NULL,
                cpu_physical_id TEXT NOT NULL,
                cpu_core_id TEXT NOT NULL,
                cpu_cores INTEGER NOT NULL,
                cpu_model_name TEXT NOT NULL,
                cpu_mhz REAL NOT NULL,
                cpu_cache_size INTEGER NOT NULL,
                cpu_flags TEXT NOT NULL,
                cpu_microcode TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS basic_metrics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at INTEGER NOT NULL,
                deleted_at INTEGER,
                cpu_user REAL NOT NULL,
                cpu_system REAL NOT NULL,
                cpu_idle REAL NOT NULL,
                cpu_nice REAL NOT NULL,
                cpu_iowait REAL NOT NULL,
                cpu_irq REAL NOT NULL,
                cpu_softirq REAL NOT NULL,
                cpu_steal REAL NOT NULL,
                cpu_guest REAL NOT NULL,
                cpu_guest_nice REAL NOT NULL,
                mem_total INTEGER NOT NULL,
                mem_available INTEGER NOT NULL,
                mem_used INTEGER NOT NULL,
                mem_used_percent REAL NOT NULL,
                mem_free INTEGER NOT NULL,
                mem_active INTEGER NOT NULL,
                mem_inactive INTEGER NOT NULL,
                mem_buffers INTEGER NOT NULL,
                mem_cached INTEGER NOT NULL,
                mem_write_back INTEGER NOT NULL,
                mem_dirty INTEGER NOT NULL,
                mem_shared INTEGER NOT NULL,
                mem_slab INTEGER NOT NULL,
                mem_sreclaimable INTEGER NOT NULL,
                mem_sunreclaim INTEGER NOT NULL,
                mem_page_tables INTEGER NOT NULL,
                mem_swap_cached INTEGER NOT NULL,
                mem_commit_limit INTEGER NOT NULL,
                mem_committed_as INTEGER NOT NULL,
                mem_swap_total INTEGER NOT NULL,
                mem_swap_free INTEGER NOT NULL,
                mem_mapped INTEGER NOT NULL,
                mem_vmalloc_total INTEGER NOT NULL,
                mem_vmalloc_used INTEGER NOT NULL,
                mem_vmalloc_chunk INTEGER NOT NULL,
                mem_huge_pages_total INTEGER NOT NULL,
                mem_huge_pages_free INTEGER NOT NULL,
                mem_huge_pages_rsvd INTEGER NOT NULL,
                mem_huge_pages_surp INTEGER NOT NULL,
                mem_huge_page_size INTEGER NOT NULL,
                mem_anon_huge_pages INTEGER NOT NULL,
                temp_sensor_key TEXT NOT NULL,
                temp_temperature REAL NOT NULL,
                temp_high REAL NOT NULL,
                temp_critical REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS process_metrics (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at INTEGER NOT NULL,
                deleted_at INTEGER,
                proc_count INTEGER NOT NULL,
                thread_count INTEGER NOT NULL,
                proc_foreground INTEGER NOT NULL,
                proc_background INTEGER NOT NULL,
                proc_running INTEGER NOT NULL,
                proc_sleeping INTEGER NOT NULL,
                proc_stopped INTEGER NOT NULL,
                proc_idle INTEGER NOT NULL,
                proc_zombie INTEGER NOT NULL,
                proc_waiting INTEGER NOT NULL,
                proc_locked INTEGER NOT NULL,
                open_files INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at INTEGER NOT NULL,
                deleted_at INTEGER,
                source TEXT NOT NULL,
                type TEXT NOT NULL,
                content TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS error_log (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at INTEGER NOT NULL,
                deleted_at INTEGER,
                source TEXT NOT NULL,
                error TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self, info), fields(store = "events", operation = "insert_system_information"))]
    pub async fn insert_system_information(&self, info: &SystemInformation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO system_info (
                created_at,
                host_hostname, host_uptime, host_boot_time, host_procs, host_os,
                host_platform, host_platform_family, host_platform_version,
                host_kernel_version, host_kernel_arch,
                host_virtualization_system, host_virtualization_role, host_host_id,
                cpu_index, cpu_vendor_id, cpu_family, cpu_model, cpu_stepping,
                cpu_physical_id, cpu_core_id, cpu_cores, cpu_model_name, cpu_mhz,
                cpu_cache_size, cpu_flags, cpu_microcode
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                      $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27)
            "#,
        )
        .bind(now_ms())
        .bind(&info.host.hostname)
        .bind(info.host.uptime as i64)
        .bind(info.host.boot_time as i64)
        .bind(info.host.procs as i64)
        .bind(&info.host.os)
        .bind(&info.host.platform)
        .bind(&info.host.platform_family)
        .bind(&info.host.platform_version)
        .bind(&info.host.kernel_version)
        .bind(&info.host.kernel_arch)
        .bind(&info.host.virtualization_system)
        .bind(&info.host.virtualization_role)
        .bind(&info.host.host_id)
        .bind(info.cpu.cpu)
        .bind(&info.cpu.vendor_id)
        .bind(&info.cpu.family)
        .bind(&info.cpu.model)
        .bind(info.cpu.stepping)
        .bind(&info.cpu.physical_id)
        .bind(&info.cpu.core_id)
        .bind(info.cpu.cores)
        .bind(&info.cpu.model_name)
        .bind(info.cpu.mhz)
        .bind(info.cpu.cache_size)
        .bind(info.cpu.flags.join(" "))
        .bind(&info.cpu.microcode)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self, metrics), fields(store = "events", operation = "insert_basic_metrics"))]
    pub async fn insert_basic_metrics(&self, metrics: &SystemMetricsBasic) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO basic_metrics (
                created_at,
                cpu_user, cpu_system, cpu_idle, cpu_nice, cpu_iowait,
                cpu_irq, cpu_softirq, cpu_steal, cpu_guest, cpu_guest_nice,
                mem_total, mem_available, mem_used, mem_used_percent, mem_free,
                mem_active, mem_inactive, mem_buffers, mem_cached, mem_write_back,
                mem_dirty, mem_shared, mem_slab, mem_sreclaimable, mem_sunreclaim,
                mem_page_tables, mem_swap_cached, mem_commit_limit, mem_committed_as,
                mem_swap_total, mem_swap_free, mem_mapped,
                mem_vmalloc_total, mem_vmalloc_used, mem_vmalloc_chunk,
                mem_huge_pages_total, mem_huge_pages_free, mem_huge_pages_rsvd,
                mem_huge_pages_surp, mem_huge_page_size, mem_anon_huge_pages,
                temp_sensor_key, temp_temperature, temp_high, temp_critical
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                      $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
                      $27, $28, $29, $30, $31, $32, $33, $34, $35, $36, $37, $38,
                      $39, $40, $41, $42, $43, $44, $45, $46)
            "#,
        )
        .bind(now_ms())
        .bind(metrics.cpu.user)
        .bind(metrics.cpu.system)
        .bind(metrics.cpu.idle)
        .bind(metrics.cpu.nice)
        .bind(metrics.cpu.iowait)
        .bind(metrics.cpu.irq)
        .bind(metrics.cpu.softirq)
        .bind(metrics.cpu.steal)
        .bind(metrics.cpu.guest)
        .bind(metrics.cpu.guest_nice)
        .bind(metrics.memory.total as i64)
        .bind(metrics.memory.available as i64)
        .bind(metrics.memory.used as i64)
        .bind(metrics.memory.used_percent)
        .bind(metrics.memory.free as i64)
        .bind(metrics.memory.active as i64)
        .bind(metrics.memory.inactive as i64)
        .bind(metrics.memory.buffers as i64)
        .bind(metrics.memory.cached as i64)
        .bind(metrics.memory.write_back as i64)
        .bind(metrics.memory.dirty as i64)
        .bind(metrics.memory.shared as i64)
        .bind(metrics.memory.slab as i64)
        .bind(metrics.memory.sreclaimable as i64)
        .bind(metrics.memory.sunreclaim as i64)
        .bind(metrics.memory.page_tables as i64)
        .bind(metrics.memory.swap_cached as i64)
        .bind(metrics.memory.commit_limit as i64)
        .bind(metrics.memory.committed_as as i64)
        .bind(metrics.memory.swap_total as i64)
        .bind(metrics.memory.swap_free as i64)
        .bind(metrics.memory.mapped as i64)
        .bind(metrics.memory.vmalloc_total as i64)
        .bind(metrics.memory.vmalloc_used as i64)
        .bind(metrics.memory.vmalloc_chunk as i64)
        .bind(metrics.memory.huge_pages_total as i64)
        .bind(metrics.memory.huge_pages_free as i64)
        .bind(metrics.memory.huge_pages_rsvd as i64)
        .bind(metrics.memory.huge_pages_surp as i64)
        .bind(metrics.memory.huge_page_size as i64)
        .bind(metrics.memory.anon_huge_pages as i64)
        .bind(&metrics.temps.sensor_key)
        .bind(metrics.temps.temperature)
        .bind(metrics.temps.high)
        .bind(metrics.temps.critical)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self, metrics), fields(store = "events", operation = "insert_process_metrics"))]
    pub async fn insert_process_metrics(
        &self,
        metrics: &ProcessMetricsAggregate,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO process_metrics (
                created_at, proc_count, thread_count, proc_foreground, proc_background,
                proc_running, proc_sleeping, proc_stopped, proc_idle, proc_zombie,
                proc_waiting, proc_locked, open_files
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(now_ms())
        .bind(metrics.proc_count as i64)
        .bind(metrics.thread_count as i64)
        .bind(metrics.proc_foreground as i64)
        .bind(metrics.proc_background as i64)
        .bind(metrics.proc_running as i64)
        .bind(metrics.proc_sleeping as i64)
        .bind(metrics.proc_stopped as i64)
        .bind(metrics.proc_idle as i64)
        .bind(metrics.proc_zombie as i64)
        .bind(metrics.proc_waiting as i64)
        .bind(metrics.proc_locked as i64)
        .bind(metrics.open_files as i64)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self, content), fields(store = "events", operation = "insert_event_log"))]
    pub async fn insert_event_log(
        &self,
        source: &str,
        kind: &str,
        content: &str,
    ) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO events_log (created_at, source, type, content) VALUES ($1, $2, $3, $4)")
            .bind(now_ms())
            .bind(source)
            .bind(kind)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(skip(self, error), fields(store = "events", operation = "insert_error_log"))]
    pub async fn insert_error_log(&self, source: &str, error: &str) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO error_log (created_at, source, error) VALUES ($1, $2, $3)")
            .bind(now_ms())
            .bind(source)
            .bind(error)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn latest_system_information(&self) -> anyhow::Result<Option<SystemInformation>> {
        let row = sqlx::query("SELECT * FROM system_info ORDER BY id DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| parse_system_info_row(&r)).transpose()
    }

    pub async fn latest_basic_metrics(&self) -> anyhow::Result<Option<SystemMetricsBasic>> {
        let row = sqlx::query("SELECT * FROM basic_metrics ORDER BY id DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| parse_basic_metrics_row(&r)).transpose()
    }

    pub async fn latest_process_metrics(&self) -> anyhow::Result<Option<ProcessMetricsAggregate>> {
        let row = sqlx::query("SELECT * FROM process_metrics ORDER BY id DESC LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| parse_process_metrics_row(&r)).transpose()
    }

    pub async fn event_log_entries(&self) -> anyhow::Result<Vec<EventLogEntry>> {
        let rows = sqlx::query("SELECT source, type, content FROM events_log ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(EventLogEntry {
                source: row.try_get("source")?,
                kind: row.try_get("type")?,
                content: row.try_get("content")?,
            });
        }
        Ok(out)
    }

    pub async fn error_log_entries(&self) -> anyhow::Result<Vec<ErrorLogEntry>> {
        let rows = sqlx::query("SELECT source, error FROM error_log ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(ErrorLogEntry {
                source: row.try_get("source")?,
                error: row.try_get("error")?,
            });
        }
        Ok(out)
    }

    pub async fn row_counts(&self) -> anyhow::Result<RowCounts> {
        Ok(RowCounts {
            system_info: self.count_rows("system_info").await?,
            basic_metrics: self.count_rows("basic_metrics").await?,
            process_metrics: self.count_rows("process_metrics").await?,
            events_log: self.count_rows("events_log").await?,
            error_log: self.count_rows("error_log").await?,
        })
    }

    async fn count_rows(&self, table: &str) -> anyhow::Result<i64> {
        // Table names are the fixed schema set, never user input.
        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Remove the database plus its WAL sidecar files (destructive startup
/// option). Missing files are fine.
fn wipe_database_files(path: &str) -> anyhow::Result<()> {
    for suffix in ["", "-wal", "-shm"] {
        let file = format!("{path}{suffix}");
        match std::fs::remove_file(&file) {
            Ok(()) => tracing::info!(file = %file, "dropped existing database file"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn parse_system_info_row(row: &SqliteRow) -> anyhow::Result<SystemInformation> {
    let flags: String = row.try_get("cpu_flags")?;
    Ok(SystemInformation {
        host: HostInfo {
            hostname: row.try_get("host_hostname")?,
            uptime: row.try_get::<i64, _>("host_uptime")? as u64,
            boot_time: row.try_get::<i64, _>("host_boot_time")? as u64,
            procs: row.try_get::<i64, _>("host_procs")? as u64,
            os: row.try_get("host_os")?,
            platform: row.try_get("host_platform")?,
            platform_family: row.try_get("host_platform_family")?,
            platform_version: row.try_get("host_platform_version")?,
            kernel_version: row.try_get("host_kernel_version")?,
            kernel_arch: row.try_get("host_kernel_arch")?,
            virtualization_system: row.try_get("host_virtualization_system")?,
            virtualization_role: row.try_get("host_virtualization_role")?,
            host_id: row.try_get("host_host_id")?,
        },
        cpu: CpuIdentity {
            cpu: row.try_get("cpu_index")?,
            vendor_id: row.try_get("cpu_vendor_id")?,
            family: row.try_get("cpu_family")?,
            model: row.try_get("cpu_model")?,
            stepping: row.try_get("cpu_stepping")?,
            physical_id: row.try_get("cpu_physical_id")?,
            core_id: row.try_get("cpu_core_id")?,
            cores: row.try_get("cpu_cores")?,
            model_name: row.try_get("cpu_model_name")?,
            mhz: row.try_get("cpu_mhz")?,
            cache_size: row.try_get("cpu_cache_size")?,
            flags: if flags.is_empty() {
                Vec::new()
            } else {
                flags.split(' ').map(str::to_string).collect()
            },
            microcode: row.try_get("cpu_microcode")?,
        },
    })
}

fn parse_basic_metrics_row(row: &SqliteRow) -> anyhow::Result<SystemMetricsBasic> {
    let mem = |name: &str| -> anyhow::Result<u64> { Ok(row.try_get::<i64, _>(name)? as u64) };
    Ok(SystemMetricsBasic {
        cpu: CpuTimes {
            user: row.try_get("cpu_user")?,
            system: row.try_get("cpu_system")?,
            idle: row.try_get("cpu_idle")?,
            nice: row.try_get("cpu_nice")?,
            iowait: row.try_get("cpu_iowait")?,
            irq: row.try_get("cpu_irq")?,
            softirq: row.try_get("cpu_softirq")?,
            steal: row.try_get("cpu_steal")?,
            guest: row.try_get("cpu_guest")?,
            guest_nice: row.try_get("cpu_guest_nice")?,
        },
        memory: MemoryStats {
            total: mem("mem_total")?,
            available: mem("mem_available")?,
            used: mem("mem_used")?,
            used_percent: row.try_get("mem_used_percent")?,
            free: mem("mem_free")?,
            active: mem("mem_active")?,
            inactive: mem("mem_inactive")?,
            buffers: mem("mem_buffers")?,
            cached: mem("mem_cached")?,
            write_back: mem("mem_write_back")?,
            dirty: mem("mem_dirty")?,
            shared: mem("mem_shared")?,
            slab: mem("mem_slab")?,
            sreclaimable: mem("mem_sreclaimable")?,
            sunreclaim: mem("mem_sunreclaim")?,
            page_tables: mem("mem_page_tables")?,
            swap_cached: mem("mem_swap_cached")?,
            commit_limit: mem("mem_commit_limit")?,
            committed_as: mem("mem_committed_as")?,
            swap_total: mem("mem_swap_total")?,
            swap_free: mem("mem_swap_free")?,
            mapped: mem("mem_mapped")?,
            vmalloc_total: mem("mem_vmalloc_total")?,
            vmalloc_used: mem("mem_vmalloc_used")?,
            vmalloc_chunk: mem("mem_vmalloc_chunk")?,
            huge_pages_total: mem("mem_huge_pages_total")?,
            huge_pages_free: mem("mem_huge_pages_free")?,
            huge_pages_rsvd: mem("mem_huge_pages_rsvd")?,
            huge_pages_surp: mem("mem_huge_pages_surp")?,
            huge_page_size: mem("mem_huge_page_size")?,
            anon_huge_pages: mem("mem_anon_huge_pages")?,
        },
        temps: TemperatureStat {
            sensor_key: row.try_get("temp_sensor_key")?,
            temperature: row.try_get("temp_temperature")?,
            high: row.try_get("temp_high")?,
            critical: row.try_get("temp_critical")?,
        },
    })
}

fn parse_process_metrics_row(row: &SqliteRow) -> anyhow::Result<ProcessMetricsAggregate> {
    let count = |name: &str| -> anyhow::Result<u64> { Ok(row.try_get::<i64, _>(name)? as u64) };
    Ok(ProcessMetricsAggregate {
        proc_count: count("proc_count")?,
        thread_count: count("thread_count")?,
        proc_foreground: count("proc_foreground")?,
        proc_background: count("proc_background")?,
        proc_running: count("proc_running")?,
        proc_sleeping: count("proc_sleeping")?,
        proc_stopped: count("proc_stopped")?,
        proc_idle: count("proc_idle")?,
        proc_zombie: count("proc_zombie")?,
        proc_waiting: count("proc_waiting")?,
        proc_locked: count("proc_locked")?,
        open_files: count("open_files")?,
    })
}
