//! Ordered unions of time intervals
//!
//! A [`TimeRoi`] collects the stretches of the time axis routed to a single
//! output stream. Intervals are kept sorted by start time and pairwise
//! disjoint; inserting an interval that overlaps or is adjacent to existing
//! ones merges them into a single interval.

use crate::roi::TimeInterval;
use serde::{Deserialize, Serialize};

/// An ordered union of disjoint half-open time intervals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRoi {
    intervals: Vec<TimeInterval>,
}

impl TimeRoi {
    /// Create an empty region of interest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `[start, stop)`, merging with any interval it overlaps or touches
    ///
    /// # Panics
    /// Panics if `start >= stop`
    pub fn add_interval(&mut self, start: i64, stop: i64) {
        let mut merged = TimeInterval::new(start, stop);

        // Fold every overlapping or adjacent interval into the incoming one,
        // then put the result back in start order
        let mut kept = Vec::with_capacity(self.intervals.len() + 1);
        for interval in self.intervals.drain(..) {
            if interval.touches(&merged) {
                merged = TimeInterval::new(
                    merged.start.min(interval.start),
                    merged.stop.max(interval.stop),
                );
            } else {
                kept.push(interval);
            }
        }
        let position = kept.partition_point(|iv| iv.start < merged.start);
        kept.insert(position, merged);
        self.intervals = kept;
    }

    /// True when no intervals are present
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Number of disjoint intervals
    pub fn num_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// The intervals, sorted by start time and pairwise disjoint
    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// Check whether an instant falls inside any interval
    pub fn contains(&self, timestamp: i64) -> bool {
        let idx = self.intervals.partition_point(|iv| iv.stop <= timestamp);
        self.intervals
            .get(idx)
            .map(|iv| iv.contains(timestamp))
            .unwrap_or(false)
    }

    /// Total covered duration in nanoseconds
    pub fn total_duration_nanos(&self) -> i64 {
        self.intervals.iter().map(TimeInterval::duration_nanos).sum()
    }

    /// Earliest covered instant, if any
    pub fn first_time(&self) -> Option<i64> {
        self.intervals.first().map(|iv| iv.start)
    }

    /// End of the latest interval, if any
    pub fn last_time(&self) -> Option<i64> {
        self.intervals.last().map(|iv| iv.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roi() {
        let roi = TimeRoi::new();
        assert!(roi.is_empty());
        assert_eq!(roi.num_intervals(), 0);
        assert_eq!(roi.total_duration_nanos(), 0);
        assert!(!roi.contains(0));
        assert_eq!(roi.first_time(), None);
        assert_eq!(roi.last_time(), None);
    }

    #[test]
    fn test_disjoint_intervals_stay_sorted() {
        let mut roi = TimeRoi::new();
        roi.add_interval(3000, 4000);
        roi.add_interval(1000, 2000);

        assert_eq!(roi.num_intervals(), 2);
        assert_eq!(
            roi.intervals(),
            &[TimeInterval::new(1000, 2000), TimeInterval::new(3000, 4000)]
        );
        assert_eq!(roi.first_time(), Some(1000));
        assert_eq!(roi.last_time(), Some(4000));
    }

    #[test]
    fn test_overlapping_intervals_merge() {
        let mut roi = TimeRoi::new();
        roi.add_interval(1000, 2000);
        roi.add_interval(1500, 3000);

        assert_eq!(roi.intervals(), &[TimeInterval::new(1000, 3000)]);
    }

    #[test]
    fn test_adjacent_intervals_merge() {
        let mut roi = TimeRoi::new();
        roi.add_interval(1000, 2000);
        roi.add_interval(2000, 3000);

        assert_eq!(roi.intervals(), &[TimeInterval::new(1000, 3000)]);
    }

    #[test]
    fn test_bridge_merges_three() {
        let mut roi = TimeRoi::new();
        roi.add_interval(1000, 2000);
        roi.add_interval(3000, 4000);
        // spans the gap, collapses everything into one
        roi.add_interval(1500, 3500);

        assert_eq!(roi.intervals(), &[TimeInterval::new(1000, 4000)]);
    }

    #[test]
    fn test_contains() {
        let mut roi = TimeRoi::new();
        roi.add_interval(1000, 2000);
        roi.add_interval(3000, 4000);

        assert!(!roi.contains(999));
        assert!(roi.contains(1000));
        assert!(!roi.contains(2000));
        assert!(!roi.contains(2500));
        assert!(roi.contains(3999));
        assert!(!roi.contains(4000));
    }

    #[test]
    fn test_total_duration() {
        let mut roi = TimeRoi::new();
        roi.add_interval(1000, 2000);
        roi.add_interval(3000, 4500);

        assert_eq!(roi.total_duration_nanos(), 2500);
    }

    #[test]
    #[should_panic(expected = "start must be less than stop")]
    fn test_inverted_interval_panics() {
        let mut roi = TimeRoi::new();
        roi.add_interval(2000, 1000);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut roi = TimeRoi::new();
        roi.add_interval(1000, 2000);
        roi.add_interval(3000, 4000);

        let json = serde_json::to_string(&roi).unwrap();
        let restored: TimeRoi = serde_json::from_str(&json).unwrap();
        assert_eq!(roi, restored);
    }
}
