//! Close-price resampling for closeline.
//!
//! This crate provides the transform from a raw series to a result table:
//!
//! - [`Bucket`] / [`bucket_for`] - Calendar bucket geometry per resample rule
//! - [`CloseResampler`] - Streaming last-value-wins resampler
//! - [`ResultTable`] / [`SummaryStats`] - Labeled rows and change extremes
//! - [`transform`] - The full resample, derive and label pass

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bucket;
mod change;
mod resampler;
mod table;
mod transform;

pub use bucket::{Bucket, bucket_for};
pub use change::pct_change;
pub use resampler::{CloseResampler, ClosedBucket};
pub use table::{ResampledRow, ResultTable, SummaryStats};
pub use transform::{Analysis, resample, transform};
