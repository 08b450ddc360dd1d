//! Route assembly for the API server.

pub mod health;
pub mod ingest;
pub mod ledger;

use axum::Router;

use crate::state::AppState;

/// All non-health routes: ingestion and ledger audit.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(ingest::router())
        .merge(ledger::router())
}
