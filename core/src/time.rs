//! Time related utils.

use chrono::Utc;

use crate::{Error, Result};

/// DateTime used by showcase, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime from now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Build a DateTime from an integer Unix timestamp in seconds.
pub fn from_timestamp(secs: i64) -> Result<DateTime> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::request_invalid(format!("timestamp {secs} is out of range")))
}

/// Format time as the integer Unix timestamp expected by the Showcase API.
///
/// Sub-second precision is dropped: `2013-06-06T15:58:54.9Z` => `1370534334`
pub fn format_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}
