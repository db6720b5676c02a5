//! Core types for the splitter: target sentinels and bulk-source rows

use serde::{Deserialize, Serialize};

/// Target value meaning "this instant belongs to no output stream"
///
/// Doubles as the close marker of a region: a well-formed splitter always
/// ends with a breakpoint carrying this value.
pub const IGNORE_TARGET: i32 = -1;

/// Target assigned by the plain two-point constructor
pub const DEFAULT_TARGET: i32 = 0;

/// Normalize a target for queries: every value below [`IGNORE_TARGET`] is
/// treated as ignore
pub fn effective_target(target: i32) -> i32 {
    target.max(IGNORE_TARGET)
}

/// One row of a splitting table
///
/// Times are fractional seconds relative to the offset passed to
/// [`TimeSplitter::from_table`](crate::TimeSplitter::from_table); the target
/// column carries the output-stream index in string form, as splitting
/// tables arrive from upstream with untyped target cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRow {
    /// Interval start, seconds relative to the table offset
    pub start_sec: f64,
    /// Interval stop, seconds relative to the table offset
    pub stop_sec: f64,
    /// Output-stream index, convertible to an integer
    pub target: String,
}

impl SplitRow {
    /// Create a row from start/stop seconds and a target index
    pub fn new(start_sec: f64, stop_sec: f64, target: impl Into<String>) -> Self {
        Self {
            start_sec,
            stop_sec,
            target: target.into(),
        }
    }
}
