// Persistence dispatcher: the sole consumer of the bus and the only task
// that touches the store, so persistence needs no locking. Routes each event
// by payload kind and inserts one row. Insert failures are not retried; the
// error propagates and takes the process down.

use crate::bus::EventReceiver;
use crate::event::EventPayload;
use crate::store::EventStore;

pub fn spawn(
    receiver: EventReceiver,
    store: EventStore,
    echo: bool,
) -> tokio::task::JoinHandle<anyhow::Result<()>> {
    tokio::spawn(run(receiver, store, echo))
}

/// Drain the bus until every publisher is gone. In production that is the
/// process lifetime; in tests it ends when the publishers are dropped.
pub async fn run(mut receiver: EventReceiver, store: EventStore, echo: bool) -> anyhow::Result<()> {
    while let Some(event) = receiver.recv().await {
        if echo {
            println!("{}", event.payload.render());
        }
        let kind = event.payload.kind();
        match event.payload {
            EventPayload::SystemInformation(info) => {
                store.insert_system_information(&info).await?;
            }
            EventPayload::SystemMetricsBasic(metrics) => {
                store.insert_basic_metrics(&metrics).await?;
            }
            EventPayload::ProcessMetricsAggregate(metrics) => {
                store.insert_process_metrics(&metrics).await?;
            }
            EventPayload::Log(content) => {
                store.insert_event_log(&event.source, kind, &content).await?;
            }
            EventPayload::Error(err) => {
                store
                    .insert_error_log(&event.source, &format!("{err:#}"))
                    .await?;
            }
            EventPayload::Signal(sig) => {
                store.insert_event_log(&event.source, kind, &sig.name).await?;
            }
        }
    }
    tracing::debug!("event bus closed; dispatcher stopping");
    Ok(())
}
