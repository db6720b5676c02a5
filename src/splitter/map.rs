//! The time splitter: an ordered breakpoint map over the time axis
//!
//! A [`TimeSplitter`] partitions the time axis into half-open regions, each
//! routed to an integer output stream. Internally it is a run-length encoded
//! step function: a `BTreeMap` from nanosecond timestamp to the target that
//! takes effect at that instant. Any instant before the first breakpoint is
//! unassigned, and a well-formed non-empty map always closes with a trailing
//! [`IGNORE_TARGET`] breakpoint.

use crate::roi::TimeRoi;
use crate::splitter::error::{SplitterError, SplitterResult};
use crate::splitter::types::{effective_target, SplitRow, DEFAULT_TARGET, IGNORE_TARGET};
use crate::time::{nanos_to_datetime, secs_to_nanos};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Ordered map from breakpoint time to the target taking effect there
///
/// Built once from a bulk source and/or a sequence of
/// [`add_roi`](TimeSplitter::add_roi) calls, then queried read-only. Later
/// insertions win over earlier ones wherever they overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSplitter {
    roi_map: BTreeMap<i64, i32>,
}

impl TimeSplitter {
    /// Create a splitter with a single region routed to [`DEFAULT_TARGET`]
    pub fn new(start: i64, stop: i64) -> SplitterResult<Self> {
        let mut splitter = Self::default();
        splitter.add_roi(start, stop, DEFAULT_TARGET)?;
        Ok(splitter)
    }

    /// Build a splitter from a binned series
    ///
    /// `edges` holds `N + 1` strictly increasing, non-negative bin
    /// boundaries in seconds; `targets` holds `N` output-stream indices, one
    /// per bin `[edges[i], edges[i+1])`. Each boundary is shifted by
    /// `offset` nanoseconds to make it absolute. Bins are merged in boundary
    /// order, ignore-valued bins included.
    pub fn from_bins(edges: &[f64], targets: &[i32], offset: i64) -> SplitterResult<Self> {
        if edges.len() != targets.len() + 1 {
            return Err(SplitterError::EdgeShapeMismatch {
                edges: edges.len(),
                targets: targets.len(),
            });
        }
        for (index, &value) in edges.iter().enumerate() {
            if value < 0.0 {
                return Err(SplitterError::NegativeEdge { index, value });
            }
        }

        let mut splitter = Self::default();
        for (bin, &target) in targets.iter().enumerate() {
            let start = offset + secs_to_nanos(edges[bin]);
            let stop = offset + secs_to_nanos(edges[bin + 1]);
            if target != IGNORE_TARGET
                && (splitter.value_at_time(start) != IGNORE_TARGET
                    || splitter.value_at_time(stop) != IGNORE_TARGET)
            {
                tracing::warn!(bin, start, stop, "bin overwrites a previously assigned region");
            }
            splitter.add_roi(start, stop, target)?;
        }
        Ok(splitter)
    }

    /// Build a splitter from a table of rows
    ///
    /// Row times are seconds relative to `offset` nanoseconds; the target
    /// column must parse as an integer. Rows are merged in order, so a later
    /// row wins over any earlier row it overlaps.
    pub fn from_table(rows: &[SplitRow], offset: i64) -> SplitterResult<Self> {
        let mut splitter = Self::default();
        for (row, entry) in rows.iter().enumerate() {
            let start = offset + secs_to_nanos(entry.start_sec);
            let stop = offset + secs_to_nanos(entry.stop_sec);
            let target: i32 =
                entry
                    .target
                    .trim()
                    .parse()
                    .map_err(|_| SplitterError::InvalidTarget {
                        row,
                        value: entry.target.clone(),
                    })?;

            if splitter.value_at_time(start) != IGNORE_TARGET
                || splitter.value_at_time(stop) != IGNORE_TARGET
            {
                tracing::warn!(row, start, stop, "row overwrites a previously assigned region");
            }
            splitter.add_roi(start, stop, target)?;
        }
        Ok(splitter)
    }

    /// Merge the region `[start, stop)` into the splitter, routed to `target`
    ///
    /// Later calls win over earlier ones wherever they overlap; merging
    /// [`IGNORE_TARGET`] carves a hole. Returns
    /// [`SplitterError::IntervalOrder`] if `start >= stop`, leaving the map
    /// untouched.
    pub fn add_roi(&mut self, start: i64, stop: i64, target: i32) -> SplitterResult<()> {
        if start >= stop {
            return Err(SplitterError::IntervalOrder { start, stop });
        }

        let first_key = self.roi_map.keys().next().copied();
        let last_key = self.roi_map.keys().next_back().copied();

        match (first_key, last_key) {
            (None, _) => {
                // nothing mapped yet
                self.clear_and_replace(start, stop, target);
            }
            (Some(first), Some(last)) if start <= first && stop >= last => {
                // the new region subsumes everything already mapped
                self.clear_and_replace(start, stop, target);
            }
            (Some(first), Some(last)) if stop < first || start > last => {
                // entirely outside the mapped range; unassigned is already
                // the implicit state there, so an ignore region changes
                // nothing
                if target > IGNORE_TARGET {
                    self.roi_map.insert(start, target);
                    self.roi_map.insert(stop, IGNORE_TARGET);
                }
            }
            _ => self.splice(start, stop, target),
        }
        Ok(())
    }

    /// Paint `[start, stop) = target` over part of the mapped range
    ///
    /// Three pieces of state drive the splice: the value in effect just
    /// before `start` (left-boundary compaction), the value in effect at
    /// `stop` (the continuation restored after the new region), and the
    /// breakpoints inside `[start, stop]` (subsumed by the new region; a
    /// breakpoint exactly at `stop` is re-derived from the continuation).
    fn splice(&mut self, start: i64, stop: i64, target: i32) {
        tracing::debug!(start, stop, target_index = target, "splicing region into splitter");

        let continuation = self.value_at_time(stop);
        let before = self
            .roi_map
            .range(..start)
            .next_back()
            .map(|(_, &value)| value)
            .unwrap_or(IGNORE_TARGET);

        let subsumed: Vec<i64> = self
            .roi_map
            .range(start..=stop)
            .map(|(&key, _)| key)
            .collect();
        for key in subsumed {
            self.roi_map.remove(&key);
        }

        // transition into the new region, unless it repeats the value
        // already in effect there (an unassigned head of the map stays
        // implicit)
        if target != before {
            self.roi_map.insert(start, target);
        }
        // transition out again; when the continuation matches the new value
        // there is no transition, which also drops a now-redundant ignore
        // marker just past `stop`
        if continuation != target {
            self.roi_map.insert(stop, continuation);
        }

        // a non-empty splitter must close with the ignore marker; anything
        // else is a defect in the splice itself
        let closing = self.roi_map.values().next_back().copied();
        assert_eq!(
            closing,
            Some(IGNORE_TARGET),
            "splitter must close with the ignore marker after a splice"
        );
    }

    /// Drop everything and map `[start, stop)` to `target`
    ///
    /// Ignore-valued targets leave the map empty: unassigned is the implicit
    /// state of the whole axis.
    fn clear_and_replace(&mut self, start: i64, stop: i64, target: i32) {
        self.roi_map.clear();
        if target > IGNORE_TARGET {
            self.roi_map.insert(start, target);
            self.roi_map.insert(stop, IGNORE_TARGET);
        }
    }

    /// Classify an instant
    ///
    /// Returns the target of the greatest breakpoint at or before `time`,
    /// or [`IGNORE_TARGET`] when the splitter is empty or `time` precedes
    /// the first breakpoint. O(log n).
    pub fn value_at_time(&self, time: i64) -> i32 {
        self.roi_map
            .range(..=time)
            .next_back()
            .map(|(_, &value)| value)
            .unwrap_or(IGNORE_TARGET)
    }

    /// Sorted, deduplicated list of output streams with at least one region
    pub fn active_targets(&self) -> Vec<i32> {
        let targets: BTreeSet<i32> = self
            .roi_map
            .values()
            .copied()
            .filter(|&value| value > IGNORE_TARGET)
            .collect();
        targets.into_iter().collect()
    }

    /// Reconstruct the union of time intervals routed to `target`
    ///
    /// Targets below [`IGNORE_TARGET`] are normalized to it; requesting the
    /// ignore sentinel returns the interior unassigned gaps. An empty result
    /// for a non-negative target is not an error, it means the stream
    /// currently has no data.
    pub fn time_roi(&self, target: i32) -> TimeRoi {
        let effective = effective_target(target);

        let mut output = TimeRoi::new();
        let mut breakpoints = self.roi_map.iter().peekable();
        while let Some((&time, &value)) = breakpoints.next() {
            if value != effective {
                continue;
            }
            // the region extends to the next breakpoint; a matching final
            // breakpoint has nothing after it and adds no interval
            if let Some(&(&next_time, _)) = breakpoints.peek() {
                output.add_interval(time, next_time);
            }
        }

        if target >= 0 && output.is_empty() {
            tracing::warn!(target_index = target, "no regions are routed to output stream");
        }
        output
    }

    /// Number of breakpoints currently stored (diagnostics)
    pub fn num_breakpoints(&self) -> usize {
        self.roi_map.len()
    }

    /// True when no regions have been mapped
    pub fn is_empty(&self) -> bool {
        self.roi_map.is_empty()
    }

    /// Ordered view of the raw `(time, target)` breakpoints
    pub fn breakpoints(&self) -> impl Iterator<Item = (i64, i32)> + '_ {
        self.roi_map.iter().map(|(&time, &value)| (time, value))
    }
}

impl fmt::Display for TimeSplitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&time, &value) in &self.roi_map {
            writeln!(f, "{}|{}", value, nanos_to_datetime(time).to_rfc3339())?;
        }
        Ok(())
    }
}
