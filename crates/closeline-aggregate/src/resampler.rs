//! Streaming last-value-wins resampling.

use chrono::NaiveDateTime;
use closeline_types::ResampleRule;

use crate::{Bucket, bucket_for};

/// A bucket whose last close is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedBucket {
    /// Bucket geometry.
    pub bucket: Bucket,
    /// Close of the last observation in the bucket.
    pub close: f64,
}

/// Streaming close-price resampler.
///
/// Feed exchange-local points in chronological order; a bucket is emitted as
/// soon as a point from a later bucket arrives. Buckets without observations
/// are never produced.
#[derive(Debug)]
pub struct CloseResampler {
    rule: ResampleRule,
    current: Option<ClosedBucket>,
}

impl CloseResampler {
    /// Creates a new resampler for the given rule.
    #[must_use]
    pub const fn new(rule: ResampleRule) -> Self {
        Self {
            rule,
            current: None,
        }
    }

    /// Processes a point, potentially emitting a completed bucket.
    ///
    /// Returns `Some(bucket)` when this point opens a new bucket,
    /// `None` otherwise.
    pub fn process(&mut self, local: NaiveDateTime, close: f64) -> Option<ClosedBucket> {
        let bucket = bucket_for(self.rule, local);

        match self.current.take() {
            Some(mut open) if open.bucket == bucket => {
                open.close = close;
                self.current = Some(open);
                None
            }
            Some(completed) => {
                self.current = Some(Self::open(bucket, close));
                Some(completed)
            }
            None => {
                self.current = Some(Self::open(bucket, close));
                None
            }
        }
    }

    /// Finishes resampling, returning the bucket still open, if any.
    #[must_use]
    pub const fn finish(self) -> Option<ClosedBucket> {
        self.current
    }

    const fn open(bucket: Bucket, close: f64) -> ClosedBucket {
        ClosedBucket {
            bucket,
            close,
        }
    }
}
