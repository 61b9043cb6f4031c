//! Fetch, resample and summarise historical close prices.
//!
//! This is a facade crate that re-exports functionality from the closeline
//! workspace crates and adds the end-to-end request runner, [`analyze`].
//!
//! # Quick Start
//!
//! ```ignore
//! use closeline_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YahooClient::new(ClientConfig::default())?;
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     )?;
//!
//!     let request = AnalysisRequest::new("SPY", "Quarterly", range);
//!     let report = analyze(&client, &request).await?;
//!     for row in &report.analysis.table {
//!         println!("{} {:.2} {:?}", row.period, row.close, row.pct_change);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod request;

pub use request::{AnalysisRequest, Report, analyze, no_data_hint};

// Re-export core types
pub use closeline_types::*;

// Re-export fetch functionality
pub use closeline_fetch::{
    ClientConfig, FetchError, ParseError, PriceSource, YahooClient, parse_chart,
};

// Re-export the transform
pub use closeline_aggregate::{
    Analysis, Bucket, CloseResampler, ClosedBucket, ResampledRow, ResultTable, SummaryStats,
    bucket_for, pct_change, resample, transform,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use closeline_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, TableFormatter,
    format_change, format_price,
};

/// Prelude module for convenient imports.
///
/// ```
/// use closeline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use closeline_types::{
        CloselineError, DateRange, DateRangeError, FetchGranularity, Interval, IntervalSpec,
        PricePoint, RawSeries, ResampleRule, Result, resolve,
    };

    pub use closeline_fetch::{ClientConfig, PriceSource, YahooClient};

    pub use closeline_aggregate::{Analysis, ResampledRow, ResultTable, SummaryStats, transform};

    pub use crate::{AnalysisRequest, Report, analyze, no_data_hint};

    #[cfg(feature = "format")]
    pub use closeline_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, TableFormatter,
    };
}
