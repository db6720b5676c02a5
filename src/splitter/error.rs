//! Splitter error types
//!
//! Defines all error conditions that can occur while building a splitter.
//! Queries never fail; construction and merging validate their inputs
//! before any mutation takes place.

use thiserror::Error;

/// Errors that can occur while constructing or extending a splitter
#[derive(Error, Debug)]
pub enum SplitterError {
    /// Region of interest whose start is at or after its stop
    #[error("Invalid interval: start {start} must be earlier than stop {stop}")]
    IntervalOrder { start: i64, stop: i64 },

    /// Binned series whose edge and target counts do not line up
    #[error("Shape mismatch: a binned series needs one more edge than targets, got {edges} edges for {targets} targets")]
    EdgeShapeMismatch { edges: usize, targets: usize },

    /// Binned series containing a negative bin edge
    #[error("Bin edge {index} is negative: {value}")]
    NegativeEdge { index: usize, value: f64 },

    /// Table row whose target column is not an integer
    #[error("Row {row}: target {value:?} is not an integer")]
    InvalidTarget { row: usize, value: String },
}

/// Result type alias for splitter operations
pub type SplitterResult<T> = Result<T, SplitterError>;
