// Bus contract: per-producer FIFO, no loss or duplication, blocking
// backpressure when full, error only when the consumer is gone.

use sysmon::bus;
use sysmon::event::{Event, EventPayload};
use tokio::time::Duration;

fn log_event(n: usize) -> Event {
    Event::new("test", EventPayload::Log(format!("event-{n}")))
}

fn log_content(event: &Event) -> &str {
    match &event.payload {
        EventPayload::Log(content) => content,
        other => panic!("expected Log payload, got {}", other.kind()),
    }
}

#[tokio::test]
async fn preserves_fifo_order_per_producer() {
    let (publisher, mut rx) = bus::channel(bus::DEFAULT_CAPACITY);
    for n in 0..10 {
        publisher.publish(log_event(n)).await.unwrap();
    }
    drop(publisher);

    let mut received = Vec::new();
    while let Some(event) = rx.recv().await {
        received.push(log_content(&event).to_string());
    }
    let expected: Vec<String> = (0..10).map(|n| format!("event-{n}")).collect();
    assert_eq!(received, expected);
}

#[tokio::test]
async fn delivers_everything_from_concurrent_producers_exactly_once() {
    let (publisher, mut rx) = bus::channel(8);
    let mut producers = Vec::new();
    for p in 0..3 {
        let publisher = publisher.clone();
        producers.push(tokio::spawn(async move {
            for n in 0..20 {
                publisher
                    .publish(Event::new(
                        format!("producer-{p}"),
                        EventPayload::Log(format!("{p}:{n}")),
                    ))
                    .await
                    .unwrap();
            }
        }));
    }
    drop(publisher);

    let mut per_producer: Vec<Vec<usize>> = vec![Vec::new(); 3];
    while let Some(event) = rx.recv().await {
        let content = log_content(&event).to_string();
        let (p, n) = content.split_once(':').unwrap();
        per_producer[p.parse::<usize>().unwrap()].push(n.parse().unwrap());
    }
    for handle in producers {
        handle.await.unwrap();
    }
    // Exactly 20 each, in each producer's send order.
    for events in &per_producer {
        assert_eq!(*events, (0..20).collect::<Vec<_>>());
    }
}

#[tokio::test]
async fn full_bus_blocks_publisher_until_consumer_makes_room() {
    let (publisher, mut rx) = bus::channel(1);
    publisher.publish(log_event(0)).await.unwrap();

    // Second publish must stall while the single slot is occupied.
    let pending = {
        let publisher = publisher.clone();
        tokio::spawn(async move { publisher.publish(log_event(1)).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!pending.is_finished(), "publish should block on a full bus");

    // Draining one slot releases the blocked publisher; nothing was dropped.
    assert_eq!(log_content(&rx.recv().await.unwrap()), "event-0");
    pending.await.unwrap().unwrap();
    assert_eq!(log_content(&rx.recv().await.unwrap()), "event-1");
}

#[tokio::test]
async fn publish_fails_only_when_consumer_is_gone() {
    let (publisher, rx) = bus::channel(4);
    drop(rx);
    assert!(publisher.publish(log_event(0)).await.is_err());
}
