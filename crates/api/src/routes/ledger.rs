//! Ledger audit routes.
//!
//! Verification is for external auditors and sits entirely outside the
//! ingestion path: the pipeline only ever anchors.

use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vitalwatch_core::fingerprint::Fingerprint;

use crate::error::AppResult;
use crate::state::AppState;

/// Response payload for a verification lookup.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    /// The fingerprint that was checked, normalized to lowercase hex.
    pub fingerprint: String,
    /// Whether the ledger has this fingerprint anchored.
    pub anchored: bool,
}

/// GET /ledger/verify/{fingerprint} -- check whether a reading fingerprint
/// was anchored.
///
/// 400 on malformed hex; 503 when no ledger is configured.
async fn verify(
    State(state): State<AppState>,
    Path(fingerprint): Path<String>,
) -> AppResult<Json<VerifyResponse>> {
    let fingerprint = Fingerprint::from_hex(&fingerprint)?;
    let anchored = state.ledger_sink.verify(fingerprint.as_bytes()).await?;

    Ok(Json(VerifyResponse {
        fingerprint: fingerprint.to_hex(),
        anchored,
    }))
}

/// Mount the ledger audit routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/ledger/verify/{fingerprint}", get(verify))
}
