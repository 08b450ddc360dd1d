//! Persisted reading record model.

use serde::Serialize;
use sqlx::FromRow;
use vitalwatch_core::types::DbId;

/// A row from the `readings` table: one ingested reading together with its
/// derived status and fingerprint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VitalRecord {
    pub id: DbId,
    /// Seconds since the Unix epoch, as submitted by the sensor.
    pub ts: f64,
    pub hr: i32,
    pub spo2: f64,
    pub temp: f64,
    /// `"normal"` or `"fatal"`.
    pub status: String,
    /// 64-char lowercase hex fingerprint of the canonical reading.
    pub hash: String,
}
