use anyhow::Result;
use std::sync::Arc;
use sysmon::*;
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let config = config::Config::parse_args()?;

    let store = store::EventStore::connect(&config.db_path, config.drop_db).await?;
    store.init().await?;

    let (publisher, receiver) = bus::channel(bus::DEFAULT_CAPACITY);

    let dispatcher_handle = dispatcher::spawn(receiver, store, config.log_to_stdout);
    signals::spawn(publisher.clone(), signals::SignalPolicy::standard());

    let provider = Arc::new(metrics::SysinfoMetrics::new());
    sampler::spawn(
        provider,
        publisher,
        Duration::from_secs(config.frequency_secs),
    );

    tracing::info!(
        db_path = %config.db_path,
        frequency_secs = config.frequency_secs,
        echo = config.log_to_stdout,
        "sysmond started"
    );

    // The dispatcher runs for the process lifetime; it only returns when a
    // storage insert fails, and that error is fatal by design.
    dispatcher_handle.await??;
    Ok(())
}
