//! Error types for closeline.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for closeline operations.
pub type Result<T> = std::result::Result<T, CloselineError>;

/// Errors that can occur while serving a single analysis request.
#[derive(Error, Debug)]
pub enum CloselineError {
    /// Interval label is not one of the known intervals.
    #[error("Unknown interval: {0} (expected one of: Hourly, Daily, Weekly, Quarterly, Yearly)")]
    UnknownInterval(String),

    /// The data source returned no prices for the request.
    #[error("No data found")]
    NoDataFound,

    /// The data source failed; the cause is opaque to the pipeline.
    #[error("Upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// Ticker was empty after trimming.
    #[error("Ticker must not be empty")]
    EmptyTicker,

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// Malformed price series.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}

/// Error for price series that break the ordering or value invariants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// Timestamp at `index` is not after the previous one.
    #[error("Series timestamps must be strictly increasing (violated at index {index})")]
    NotIncreasing {
        /// Offending position.
        index: usize,
    },

    /// Close price at `index` is NaN or infinite.
    #[error("Series close price at index {index} is not finite")]
    NonFinite {
        /// Offending position.
        index: usize,
    },
}
