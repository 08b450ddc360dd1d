//! Unit tests for `WsHub`.
//!
//! These tests exercise the observer hub directly, without performing any
//! HTTP upgrades. They verify register/unregister semantics, publish
//! fan-out, removal of unreachable observers, per-observer ordering, and
//! graceful shutdown behaviour.

use axum::extract::ws::Message;
use vitalwatch_api::ws::WsHub;
use vitalwatch_core::classify::classify;
use vitalwatch_core::fingerprint::Fingerprint;
use vitalwatch_core::reading::Reading;
use vitalwatch_events::VitalEvent;

fn event(hr: i32) -> VitalEvent {
    let reading = Reading {
        timestamp: 1_700_000_000.0,
        hr,
        spo2: 95.0,
        temp: 37.0,
    };
    VitalEvent::new(&reading, &classify(&reading), &Fingerprint::of(&reading))
}

/// Extract the text payload of a pushed dashboard message.
fn text_of(msg: &Message) -> serde_json::Value {
    match msg {
        Message::Text(t) => serde_json::from_str(t.as_str()).expect("payload should be JSON"),
        other => panic!("Expected Text message, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: new hub starts with zero observers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn new_hub_has_zero_observers() {
    let hub = WsHub::new();

    assert_eq!(hub.observer_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: register() increments the observer count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_increments_observer_count() {
    let hub = WsHub::new();

    let _rx = hub.register("obs-1".to_string()).await;

    assert_eq!(hub.observer_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: unregister() decrements the observer count
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unregister_decrements_observer_count() {
    let hub = WsHub::new();

    let _rx = hub.register("obs-1".to_string()).await;
    assert_eq!(hub.observer_count().await, 1);

    hub.unregister("obs-1").await;
    assert_eq!(hub.observer_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: unregister() with unknown ID is a no-op
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unregister_unknown_id_is_noop() {
    let hub = WsHub::new();

    let _rx = hub.register("obs-1".to_string()).await;
    hub.unregister("nonexistent").await;

    assert_eq!(hub.observer_count().await, 1);
}

// ---------------------------------------------------------------------------
// Test: publish() delivers one message to every registered observer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_reaches_all_observers() {
    let hub = WsHub::new();

    let mut rx1 = hub.register("obs-1".to_string()).await;
    let mut rx2 = hub.register("obs-2".to_string()).await;
    let mut rx3 = hub.register("obs-3".to_string()).await;

    hub.publish(&event(100)).await;

    for rx in [&mut rx1, &mut rx2, &mut rx3] {
        let msg = rx.recv().await.expect("observer should receive the event");
        let payload = text_of(&msg);
        assert_eq!(payload["status"], "normal");
        assert_eq!(payload["data"]["hr"], 100);
    }
}

// ---------------------------------------------------------------------------
// Test: a failing observer is unregistered, the rest still receive
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_unregisters_unreachable_observers() {
    let hub = WsHub::new();

    let rx1 = hub.register("obs-1".to_string()).await;
    let mut rx2 = hub.register("obs-2".to_string()).await;
    let mut rx3 = hub.register("obs-3".to_string()).await;
    assert_eq!(hub.observer_count().await, 3);

    // Close obs-1's channel: its next send must fail.
    drop(rx1);

    hub.publish(&event(130)).await;

    // The broken observer was removed from the registration set...
    assert_eq!(hub.observer_count().await, 2);

    // ...and the others still received exactly one message each.
    let payload = text_of(&rx2.recv().await.expect("obs-2 should receive"));
    assert_eq!(payload["status"], "fatal");
    assert_eq!(payload["data"]["cause"], "Heart rate spike detected");

    let _ = rx3.recv().await.expect("obs-3 should receive");
}

// ---------------------------------------------------------------------------
// Test: per-observer delivery order equals publish order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delivery_order_matches_publish_order() {
    let hub = WsHub::new();

    let mut rx = hub.register("obs-1".to_string()).await;

    hub.publish(&event(100)).await;
    hub.publish(&event(125)).await;
    hub.publish(&event(110)).await;

    let hrs: Vec<i64> = [
        rx.recv().await.expect("first event"),
        rx.recv().await.expect("second event"),
        rx.recv().await.expect("third event"),
    ]
    .iter()
    .map(|msg| text_of(msg)["data"]["hr"].as_i64().unwrap())
    .collect();

    assert_eq!(hrs, vec![100, 125, 110]);
}

// ---------------------------------------------------------------------------
// Test: publish() with no observers does not panic
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_with_no_observers_is_noop() {
    let hub = WsHub::new();

    hub.publish(&event(100)).await;

    assert_eq!(hub.observer_count().await, 0);
}

// ---------------------------------------------------------------------------
// Test: shutdown_all() sends Close and clears all observers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shutdown_all_sends_close_and_clears() {
    let hub = WsHub::new();

    let mut rx1 = hub.register("obs-1".to_string()).await;
    let mut rx2 = hub.register("obs-2".to_string()).await;
    assert_eq!(hub.observer_count().await, 2);

    hub.shutdown_all().await;

    // Observer count should be zero after shutdown.
    assert_eq!(hub.observer_count().await, 0);

    // Both receivers should have received a Close message.
    let msg1 = rx1.recv().await.expect("rx1 should receive Close");
    assert!(
        matches!(msg1, Message::Close(None)),
        "Expected Close(None), got: {msg1:?}"
    );

    let msg2 = rx2.recv().await.expect("rx2 should receive Close");
    assert!(
        matches!(msg2, Message::Close(None)),
        "Expected Close(None), got: {msg2:?}"
    );

    // After Close, the channel should be closed (no more messages).
    assert!(
        rx1.recv().await.is_none(),
        "Channel should be closed after shutdown"
    );
}

// ---------------------------------------------------------------------------
// Test: re-registering with the same ID replaces the previous observer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_id_replaces_previous_observer() {
    let hub = WsHub::new();

    let _rx_old = hub.register("obs-1".to_string()).await;
    assert_eq!(hub.observer_count().await, 1);

    // Re-register with the same ID -- should replace, not duplicate.
    let mut rx_new = hub.register("obs-1".to_string()).await;
    assert_eq!(hub.observer_count().await, 1);

    hub.publish(&event(100)).await;
    let msg = rx_new.recv().await.expect("new rx should receive message");
    assert_eq!(text_of(&msg)["data"]["hr"], 100);
}
