//! Output formatters for closeline.
//!
//! This crate provides formatters for writing a resampled price table
//! and its summary to various output formats:
//!
//! - [`TableFormatter`] - Aligned, human-readable terminal table
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON document or NDJSON rows

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(feature = "csv")]
mod csv;
mod formatter;
#[cfg(feature = "json")]
mod json;
mod table;

#[cfg(feature = "csv")]
pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
#[cfg(feature = "json")]
pub use json::{JsonFormatter, JsonStyle};
pub use table::{TableFormatter, format_change, format_price};
