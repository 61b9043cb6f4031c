//! Core types for the closeline price-change analyzer.
//!
//! This crate provides the fundamental data structures used throughout closeline:
//!
//! - [`Interval`] / [`IntervalSpec`] - Period labels and their fetch/resample mapping
//! - [`resolve`] - Label lookup against the fixed interval table
//! - [`RawSeries`] - Close prices as returned by a data source
//! - [`DateRange`] - Date range for data retrieval

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod interval;
mod series;

pub use chrono_tz::Tz;
pub use date_range::DateRange;
pub use error::{CloselineError, DateRangeError, Result, SeriesError};
pub use interval::{FetchGranularity, Interval, IntervalSpec, ResampleRule, resolve};
pub use series::{PricePoint, RawSeries};
