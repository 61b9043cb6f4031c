//! Price data fetching for closeline.
//!
//! This crate provides the data-source collaborator of the pipeline:
//!
//! - [`PriceSource`] - Async trait the pipeline fetches through
//! - [`YahooClient`] - HTTP client for the Yahoo Finance chart endpoint
//! - [`url::chart_url`] - Chart request URL construction
//! - [`parse_chart`] - Chart JSON to [`closeline_types::RawSeries`]

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod parse;
mod source;
pub mod url;

pub use client::{ClientConfig, FetchError, YahooClient};
pub use parse::{ParseError, parse_chart};
pub use source::PriceSource;
