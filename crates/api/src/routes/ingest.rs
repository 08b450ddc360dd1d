//! The ingestion boundary.

use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Deserialize;
use vitalwatch_core::reading::Reading;

use crate::error::AppResult;
use crate::pipeline::{self, IngestResponse};
use crate::state::AppState;

/// Request body for `POST /ingest`.
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub timestamp: f64,
    pub hr: i32,
    pub spo2: f64,
    pub temp: f64,
}

impl From<IngestRequest> for Reading {
    fn from(req: IngestRequest) -> Self {
        Reading {
            timestamp: req.timestamp,
            hr: req.hr,
            spo2: req.spo2,
            temp: req.temp,
        }
    }
}

/// POST /ingest -- run one reading through the pipeline.
///
/// Returns `{status, fingerprint, cause}`; 400 on malformed fields, 500
/// when the append fails (in which case nothing was broadcast or
/// scheduled).
async fn ingest(
    State(state): State<AppState>,
    Json(req): Json<IngestRequest>,
) -> AppResult<Json<IngestResponse>> {
    let response = pipeline::ingest(&state, req.into()).await?;
    Ok(Json(response))
}

/// Mount the ingestion route.
pub fn router() -> Router<AppState> {
    Router::new().route("/ingest", post(ingest))
}
