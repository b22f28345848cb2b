//! UTC timestamps in the `yyyyMMddHHmmss` form used by `lastUpdated`.

use chrono::{DateTime, NaiveDateTime, Utc};
use mvnmeta_util::errors::{MetadataError, MetadataResult};

/// `chrono` format string for `lastUpdated` values.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// The current time as a `lastUpdated` value.
pub fn utc_timestamp() -> String {
    format_timestamp(&Utc::now())
}

pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `yyyyMMddHHmmss` value as UTC.
pub fn parse_timestamp(value: &str) -> MetadataResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| MetadataError::Timestamp {
            message: format!("'{value}' is not yyyyMMddHHmmss: {e}"),
        })
}

/// Numeric value of a timestamp with any dots removed, so `20090527.162714`
/// and `20090527162714` compare as the same instant.
///
/// Returns `None` for values that are not all digits after dot removal.
pub fn timestamp_value(value: &str) -> Option<u64> {
    let digits: String = value.trim().chars().filter(|c| *c != '.').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
