//! Classification output types
//!
//! The answers a splitter hands to downstream consumers:
//!
//! - **TimeInterval**: a half-open `[start, stop)` interval on the
//!   nanosecond time axis
//! - **TimeRoi**: an ordered union of disjoint intervals, describing every
//!   stretch of time routed to one output stream

mod time_roi;

pub use time_roi::TimeRoi;

use serde::{Deserialize, Serialize};

/// Half-open time interval `[start, stop)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Start timestamp (inclusive), in nanoseconds since the epoch
    pub start: i64,
    /// Stop timestamp (exclusive), in nanoseconds since the epoch
    pub stop: i64,
}

impl TimeInterval {
    /// Create a new interval
    ///
    /// # Panics
    /// Panics if `start >= stop`
    pub fn new(start: i64, stop: i64) -> Self {
        assert!(start < stop, "TimeInterval: start must be less than stop");
        Self { start, stop }
    }

    /// Create an interval, returning None if invalid
    pub fn try_new(start: i64, stop: i64) -> Option<Self> {
        if start < stop {
            Some(Self { start, stop })
        } else {
            None
        }
    }

    /// Check if a timestamp falls within this interval
    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp < self.stop
    }

    /// Check if this interval overlaps with another
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.stop && self.stop > other.start
    }

    /// Check if this interval overlaps or is adjacent to another
    pub fn touches(&self, other: &TimeInterval) -> bool {
        self.start <= other.stop && self.stop >= other.start
    }

    /// Get the duration in nanoseconds
    pub fn duration_nanos(&self) -> i64 {
        self.stop - self.start
    }

    /// Get the midpoint of the interval
    pub fn midpoint(&self) -> i64 {
        self.start + (self.stop - self.start) / 2
    }

    /// Get intersection with another interval, if any
    pub fn intersection(&self, other: &TimeInterval) -> Option<Self> {
        let start = self.start.max(other.start);
        let stop = self.stop.min(other.stop);
        Self::try_new(start, stop)
    }
}
