//! Repository for the append-only `readings` table.
//!
//! The write surface is a single atomic INSERT; there is deliberately no
//! update or delete. PostgreSQL's transactional isolation serializes
//! concurrent appends -- they commit in some total order and `BIGSERIAL`
//! assigns the monotonic record id.

use sqlx::PgPool;
use vitalwatch_core::classify::VitalStatus;
use vitalwatch_core::reading::Reading;
use vitalwatch_core::types::DbId;

use crate::models::reading::VitalRecord;

/// Column list for `readings` queries.
const READING_COLUMNS: &str = "id, ts, hr, spo2, temp, status, hash";

/// Provides append and read-back operations for readings.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Append one reading with its derived status and fingerprint,
    /// returning the generated id.
    ///
    /// The call returns only after the row is durably committed. On error
    /// nothing is written and the caller must treat the ingestion as
    /// failed.
    pub async fn insert(
        pool: &PgPool,
        reading: &Reading,
        status: VitalStatus,
        hash: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO readings (ts, hr, spo2, temp, status, hash) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(reading.timestamp)
        .bind(reading.hr)
        .bind(reading.spo2)
        .bind(reading.temp)
        .bind(status.as_str())
        .bind(hash)
        .fetch_one(pool)
        .await
    }

    /// Fetch a single record by id.
    pub async fn get_by_id(pool: &PgPool, id: DbId) -> Result<Option<VitalRecord>, sqlx::Error> {
        let query = format!("SELECT {READING_COLUMNS} FROM readings WHERE id = $1");
        sqlx::query_as::<_, VitalRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List recent records, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<VitalRecord>, sqlx::Error> {
        let query =
            format!("SELECT {READING_COLUMNS} FROM readings ORDER BY id DESC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, VitalRecord>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
