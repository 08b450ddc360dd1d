/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All wall-clock timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
