use std::sync::Arc;

use vitalwatch_events::{AlertSink, LedgerSink};

use crate::config::ServerConfig;
use crate::ws::WsHub;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vitalwatch_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Live dashboard observer hub.
    pub hub: Arc<WsHub>,
    /// Messaging alert sink (fatal readings only).
    pub alert_sink: Arc<AlertSink>,
    /// Fingerprint anchoring sink (fatal readings only).
    pub ledger_sink: Arc<LedgerSink>,
}
