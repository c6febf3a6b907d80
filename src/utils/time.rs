//! Time and date parsing for the tagging boundary

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{TaggerError, TaggerResult};

/// Parse an RFC 3339 timestamp and normalize it to UTC
pub fn parse_timestamp(raw: &str) -> TaggerResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| TaggerError::InvalidTimestamp(raw.to_string()))
}

/// Parse a `YYYY-MM-DD` game date
pub fn parse_game_date(raw: &str) -> TaggerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| TaggerError::InvalidDate(raw.to_string()))
}
