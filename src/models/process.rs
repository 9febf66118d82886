// Aggregate process-state counts for one tick

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetricsAggregate {
    pub proc_count: u64,
    pub thread_count: u64,
    pub proc_foreground: u64,
    pub proc_background: u64,
    pub proc_running: u64,
    pub proc_sleeping: u64,
    pub proc_stopped: u64,
    pub proc_idle: u64,
    pub proc_zombie: u64,
    pub proc_waiting: u64,
    pub proc_locked: u64,
    /// Open file descriptors summed across all visible processes.
    pub open_files: u64,
}
