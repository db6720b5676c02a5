//! # Chronosplit
//!
//! Time-interval classification - an incrementally built splitter that
//! partitions a time axis into disjoint, half-open regions, each routed to
//! an integer output stream.
//!
//! ## Features
//!
//! - **Incremental construction**: merge overlapping regions of interest
//!   one at a time, later regions win over earlier ones
//! - **Bulk sources**: build from explicit intervals, binned series, or
//!   splitting tables
//! - **Fast classification**: O(log n) point lookup over a run-length
//!   encoded step function
//! - **Stream reconstruction**: recover the full interval union routed to
//!   any output stream
//!
//! ## Modules
//!
//! - [`splitter`]: the breakpoint map and its construction/merge/query ops
//! - [`roi`]: interval and interval-union value types
//! - [`time`]: nanosecond timestamps and conversions
//!
//! ## Quick Start
//!
//! ```rust
//! use chronosplit::{TimeSplitter, IGNORE_TARGET};
//!
//! fn main() -> Result<(), chronosplit::SplitterError> {
//!     // one region routed to stream 0
//!     let mut splitter = TimeSplitter::new(0, 10_000)?;
//!
//!     // later regions win over earlier ones
//!     splitter.add_roi(3_000, 7_000, 1)?;
//!
//!     assert_eq!(splitter.value_at_time(5_000), 1);
//!     assert_eq!(splitter.value_at_time(8_000), 0);
//!     assert_eq!(splitter.value_at_time(12_000), IGNORE_TARGET);
//!
//!     // how many output streams to allocate, and what belongs to each
//!     for target in splitter.active_targets() {
//!         let roi = splitter.time_roi(target);
//!         println!("stream {}: {} intervals", target, roi.num_intervals());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod roi;
pub mod splitter;
pub mod time;

// Re-export top-level types for convenience
pub use splitter::{
    effective_target, SplitRow, SplitterError, SplitterResult, TimeSplitter, DEFAULT_TARGET,
    IGNORE_TARGET,
};

pub use roi::{TimeInterval, TimeRoi};

pub use time::{
    datetime_to_nanos, nanos_to_datetime, nanos_to_secs, secs_to_nanos, NANOS_PER_SEC,
};
