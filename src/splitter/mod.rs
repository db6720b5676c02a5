//! Time splitter core
//!
//! Builds and queries the breakpoint map that routes instants to output
//! streams:
//!
//! - **types**: target sentinels and bulk-source rows
//! - **map**: the splitter itself (construction, merging, queries)
//! - **error**: error types
//!
//! # Architecture
//!
//! ```text
//! Build Path:
//!   new / from_bins / from_table → add_roi per region
//!        → case dispatch: empty | covers all | disjoint | interior splice
//!        → BTreeMap<i64, i32>  (run-length encoded step function)
//!
//! Query Path:
//!   value_at_time → floor lookup
//!   active_targets → distinct non-ignore values
//!   time_roi → per-stream interval union
//! ```
//!
//! # Example
//!
//! ```rust
//! use chronosplit::splitter::TimeSplitter;
//!
//! let splitter = TimeSplitter::from_bins(&[0.0, 5.0, 10.0], &[0, 1], 0).unwrap();
//! assert_eq!(splitter.active_targets(), vec![0, 1]);
//! ```

pub mod error;
pub mod map;
pub mod types;

// Re-export commonly used types
pub use error::{SplitterError, SplitterResult};
pub use map::TimeSplitter;
pub use types::{effective_target, SplitRow, DEFAULT_TARGET, IGNORE_TARGET};
