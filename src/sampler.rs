// Sampling orchestrator: fans the three providers out concurrently each tick,
// turns their outcomes into events, then sleeps for the configured frequency.
// The sleep starts after the cycle completes, so a slow cycle delays the next
// tick rather than overlapping it.

use crate::bus::{BusClosed, EventPublisher};
use crate::event::{Event, EventPayload};
use crate::metrics::{MetricsProvider, ProviderResult};
use std::sync::Arc;
use tokio::task::JoinError;
use tokio::time::Duration;
use tracing::Instrument;

pub const SOURCE_SYSTEM_INFORMATION: &str = "system_information";
pub const SOURCE_BASIC_METRICS: &str = "basic_metrics";
pub const SOURCE_PROCESS_METRICS: &str = "process_metrics";

pub fn spawn(
    provider: Arc<dyn MetricsProvider>,
    publisher: EventPublisher,
    frequency: Duration,
) -> tokio::task::JoinHandle<()> {
    let span = tracing::span!(
        tracing::Level::DEBUG,
        "sampler",
        frequency_secs = frequency.as_secs()
    );
    tokio::spawn(
        async move {
            loop {
                if run_cycle(provider.clone(), &publisher).await.is_err() {
                    tracing::debug!("event bus closed; sampler stopping");
                    break;
                }
                tokio::time::sleep(frequency).await;
            }
        }
        .instrument(span),
    )
}

/// One tick: run all three providers on blocking tasks, wait for all of them,
/// then publish each outcome. A provider with N errors contributes exactly N
/// error events and no snapshot; a clean provider contributes exactly one
/// snapshot event. No per-provider timeout: a hung provider stalls the cycle.
pub async fn run_cycle(
    provider: Arc<dyn MetricsProvider>,
    publisher: &EventPublisher,
) -> Result<(), BusClosed> {
    let p = provider.clone();
    let system_information = tokio::task::spawn_blocking(move || p.system_information());
    let p = provider.clone();
    let basic_metrics = tokio::task::spawn_blocking(move || p.basic_metrics());
    let p = provider;
    let process_metrics = tokio::task::spawn_blocking(move || p.process_metrics());

    let (system_information, basic_metrics, process_metrics) =
        tokio::join!(system_information, basic_metrics, process_metrics);

    publish_outcome(
        publisher,
        SOURCE_SYSTEM_INFORMATION,
        system_information,
        EventPayload::SystemInformation,
    )
    .await?;
    publish_outcome(
        publisher,
        SOURCE_BASIC_METRICS,
        basic_metrics,
        EventPayload::SystemMetricsBasic,
    )
    .await?;
    publish_outcome(
        publisher,
        SOURCE_PROCESS_METRICS,
        process_metrics,
        EventPayload::ProcessMetricsAggregate,
    )
    .await?;
    Ok(())
}

async fn publish_outcome<T>(
    publisher: &EventPublisher,
    source: &str,
    joined: Result<ProviderResult<T>, JoinError>,
    into_payload: impl FnOnce(T) -> EventPayload,
) -> Result<(), BusClosed> {
    match joined {
        Ok((snapshot, errs)) if errs.is_empty() => {
            publisher
                .publish(Event::new(source, into_payload(snapshot)))
                .await
        }
        Ok((_, errs)) => {
            tracing::warn!(source, errors = errs.len(), "provider reported errors; snapshot suppressed");
            for err in errs {
                publisher
                    .publish(Event::new(source, EventPayload::Error(err)))
                    .await?;
            }
            Ok(())
        }
        Err(join_err) => {
            tracing::warn!(source, error = %join_err, "provider task failed");
            publisher
                .publish(Event::new(
                    source,
                    EventPayload::Error(anyhow::anyhow!("provider task failed: {join_err}")),
                ))
                .await
        }
    }
}
