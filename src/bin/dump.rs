// Dump the latest persisted snapshots plus the event and error logs as JSON.
//
// Usage: sysmon-dump [DB_PATH]
//   DB_PATH  default: /usr/share/sysmon.db

use std::env;
use sysmon::store::EventStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .map(String::as_str)
        .unwrap_or("/usr/share/sysmon.db");

    let store = EventStore::connect(path, false).await?;
    store.init().await?;

    let dump = serde_json::json!({
        "rowCounts": store.row_counts().await?,
        "systemInformation": store.latest_system_information().await?,
        "basicMetrics": store.latest_basic_metrics().await?,
        "processMetrics": store.latest_process_metrics().await?,
        "events": store.event_log_entries().await?,
        "errors": store.error_log_entries().await?,
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
