// End-to-end: sampler -> bus -> dispatcher -> store, plus routing of log,
// error and signal events.

mod common;

use common::{FakeProvider, sample_system_information};
use std::sync::Arc;
use sysmon::event::{Event, EventPayload, SignalInfo};
use sysmon::store::EventStore;
use sysmon::{bus, dispatcher, sampler, signals};

async fn temp_store(dir: &tempfile::TempDir) -> EventStore {
    let path = dir.path().join("sysmon.db");
    let store = EventStore::connect(path.to_str().unwrap(), false)
        .await
        .unwrap();
    store.init().await.unwrap();
    store
}

fn reopen_path(dir: &tempfile::TempDir) -> String {
    dir.path().join("sysmon.db").to_str().unwrap().to_string()
}

#[tokio::test]
async fn one_cycle_with_partial_failure_persists_the_expected_rows() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    let (publisher, receiver) = bus::channel(bus::DEFAULT_CAPACITY);
    let provider = FakeProvider {
        basic_metrics_errors: vec!["cpu read failed".into(), "meminfo read failed".into()],
        ..FakeProvider::default()
    };
    sampler::run_cycle(Arc::new(provider), &publisher)
        .await
        .unwrap();
    drop(publisher);

    dispatcher::run(receiver, store, false).await.unwrap();

    let store = EventStore::connect(&reopen_path(&dir), false).await.unwrap();
    let counts = store.row_counts().await.unwrap();
    assert_eq!(counts.system_info, 1);
    assert_eq!(counts.basic_metrics, 0);
    assert_eq!(counts.error_log, 2);
    assert_eq!(counts.process_metrics, 1);
    assert_eq!(counts.events_log, 0);

    let errors = store.error_log_entries().await.unwrap();
    assert!(errors.iter().all(|e| e.source == sampler::SOURCE_BASIC_METRICS));
}

#[tokio::test]
async fn published_snapshot_round_trips_through_storage() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    let (publisher, receiver) = bus::channel(bus::DEFAULT_CAPACITY);
    sampler::run_cycle(Arc::new(FakeProvider::default()), &publisher)
        .await
        .unwrap();
    drop(publisher);
    dispatcher::run(receiver, store, false).await.unwrap();

    let store = EventStore::connect(&reopen_path(&dir), false).await.unwrap();
    let info = store.latest_system_information().await.unwrap().unwrap();
    assert_eq!(info, sample_system_information());
}

#[tokio::test]
async fn signal_events_land_in_events_log_with_signal_type() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    let (publisher, receiver) = bus::channel(bus::DEFAULT_CAPACITY);
    publisher
        .publish(Event::new(
            signals::SOURCE_OS,
            EventPayload::Signal(SignalInfo {
                name: "SIGHUP".into(),
                number: signals::SIGHUP,
            }),
        ))
        .await
        .unwrap();
    drop(publisher);
    dispatcher::run(receiver, store, false).await.unwrap();

    let store = EventStore::connect(&reopen_path(&dir), false).await.unwrap();
    let events = store.event_log_entries().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source, "OS");
    assert_eq!(events[0].kind, "SIGNAL");
    assert_eq!(events[0].content, "SIGHUP");
}

#[tokio::test]
async fn free_text_events_land_in_events_log_with_event_type() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    let (publisher, receiver) = bus::channel(bus::DEFAULT_CAPACITY);
    publisher
        .publish(Event::new("startup", EventPayload::Log("hello".into())))
        .await
        .unwrap();
    drop(publisher);
    dispatcher::run(receiver, store, false).await.unwrap();

    let store = EventStore::connect(&reopen_path(&dir), false).await.unwrap();
    let events = store.event_log_entries().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source, "startup");
    assert_eq!(events[0].kind, "EVENT");
    assert_eq!(events[0].content, "hello");
}

#[tokio::test]
async fn spawned_dispatcher_drains_until_publishers_are_gone() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = temp_store(&dir).await;

    let (publisher, receiver) = bus::channel(4);
    let handle = dispatcher::spawn(receiver, store, false);
    for n in 0..10 {
        publisher
            .publish(Event::new("test", EventPayload::Log(format!("event-{n}"))))
            .await
            .unwrap();
    }
    drop(publisher);
    handle.await.unwrap().unwrap();

    let store = EventStore::connect(&reopen_path(&dir), false).await.unwrap();
    assert_eq!(store.row_counts().await.unwrap().events_log, 10);
}
