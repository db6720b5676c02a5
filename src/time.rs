//! Absolute-time representation and conversions
//!
//! Timestamps throughout the crate are `i64` nanoseconds since the Unix
//! epoch. Bulk sources (binned series, splitting tables) supply times as
//! fractional seconds relative to a caller-provided absolute offset; the
//! helpers here convert those, and bridge to [`chrono`] datetimes for
//! human-readable rendering.

use chrono::{DateTime, Utc};

/// Nanoseconds per second
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Convert fractional seconds to nanoseconds, rounded to the nearest
/// nanosecond
pub fn secs_to_nanos(secs: f64) -> i64 {
    (secs * NANOS_PER_SEC as f64).round() as i64
}

/// Convert nanoseconds to fractional seconds
pub fn nanos_to_secs(nanos: i64) -> f64 {
    nanos as f64 / NANOS_PER_SEC as f64
}

/// Convert a UTC datetime to nanoseconds since the Unix epoch
///
/// Returns `None` if the datetime falls outside the range representable in
/// an `i64` nanosecond count (roughly years 1677 through 2262).
pub fn datetime_to_nanos(dt: &DateTime<Utc>) -> Option<i64> {
    dt.timestamp_nanos_opt()
}

/// Convert nanoseconds since the Unix epoch to a UTC datetime
pub fn nanos_to_datetime(nanos: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_nanos(nanos)
}
