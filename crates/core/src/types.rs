use chrono::{SecondsFormat, Utc};

/// Product ids are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Timestamps are persisted as RFC 3339 text in UTC.
pub type Timestamp = String;

/// Current UTC time formatted for storage, e.g. `2026-10-17T09:30:00.123Z`.
pub fn now() -> Timestamp {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
