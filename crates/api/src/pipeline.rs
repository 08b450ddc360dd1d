//! The ingestion pipeline.
//!
//! Orchestrates the life of one reading: validate, fingerprint, classify,
//! persist, fan out. Persistence is the only step the submitter waits on
//! and the only one whose failure reaches them; everything after a
//! successful commit degrades silently and independently per sink.
//!
//! Per-reading state machine: received -> fingerprinted+classified ->
//! persisted -> broadcast dispatched -> (iff fatal) background-notified.
//! The terminal state is reached once persistence succeeds and broadcast
//! has been attempted; background sink outcomes are logged only.

use std::sync::Arc;

use serde::Serialize;
use vitalwatch_core::classify::{classify, VitalStatus};
use vitalwatch_core::fingerprint::Fingerprint;
use vitalwatch_core::reading::Reading;
use vitalwatch_db::repositories::ReadingRepo;
use vitalwatch_events::delivery::alert::format_alert;
use vitalwatch_events::VitalEvent;

use crate::error::AppResult;
use crate::state::AppState;

/// Response returned to the submitter for every accepted reading.
#[derive(Debug, Clone, Serialize)]
pub struct IngestResponse {
    pub status: VitalStatus,
    /// 64-char lowercase hex fingerprint of the canonical reading.
    pub fingerprint: String,
    /// Set iff `status` is `fatal`.
    pub cause: Option<String>,
}

/// Ingest a single reading.
///
/// Step order is the contract:
/// 1. Validation -- malformed readings are rejected before any hashing.
/// 2. Fingerprint + classification (pure, in-process).
/// 3. Durable append. On failure the request fails here and no side
///    effect of any kind is dispatched.
/// 4. Broadcast to live observers, attempted before returning; observer
///    failures are isolated inside the hub.
/// 5. Iff fatal: detach alert delivery and ledger anchoring as
///    independent background tasks. Neither delays nor can fail the
///    response.
pub async fn ingest(state: &AppState, reading: Reading) -> AppResult<IngestResponse> {
    reading.validate()?;

    let fingerprint = Fingerprint::of(&reading);
    let classification = classify(&reading);

    let record_id = ReadingRepo::insert(
        &state.pool,
        &reading,
        classification.status,
        &fingerprint.to_hex(),
    )
    .await?;

    let event = VitalEvent::new(&reading, &classification, &fingerprint);
    tracing::info!(
        record_id,
        status = %classification.status,
        fingerprint = %event.fingerprint,
        "Reading recorded"
    );

    state.hub.publish(&event).await;

    if classification.status == VitalStatus::Fatal {
        dispatch_fatal_sinks(state, &event, &fingerprint);
    }

    Ok(IngestResponse {
        status: event.status,
        fingerprint: event.fingerprint,
        cause: event.cause,
    })
}

/// Schedule the alert and ledger deliveries for a fatal reading.
///
/// Two detached tasks, deliberately not awaited and not holding any lock:
/// a slow or failing sink must never delay a later ingestion or this
/// response.
fn dispatch_fatal_sinks(state: &AppState, event: &VitalEvent, fingerprint: &Fingerprint) {
    let alert_sink = Arc::clone(&state.alert_sink);
    let alert_text = format_alert(event);
    tokio::spawn(async move {
        alert_sink.notify(&alert_text).await;
    });

    let ledger_sink = Arc::clone(&state.ledger_sink);
    let digest = *fingerprint.as_bytes();
    tokio::spawn(async move {
        ledger_sink.anchor(&digest).await;
    });
}
