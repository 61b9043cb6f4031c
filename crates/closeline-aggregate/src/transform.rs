//! Raw series to labeled table.

use closeline_types::{CloselineError, IntervalSpec, RawSeries, ResampleRule};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CloseResampler, ClosedBucket, ResampledRow, ResultTable, SummaryStats, pct_change};

/// Output of [`transform`]: the table and its change extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Resampled rows with derived changes.
    pub table: ResultTable,
    /// Change extremes; absent when fewer than two rows have a change.
    pub summary: Option<SummaryStats>,
}

/// Resamples a raw series into buckets using the series' exchange time zone.
#[must_use]
pub fn resample(raw: &RawSeries, rule: ResampleRule) -> Vec<ClosedBucket> {
    let mut resampler = CloseResampler::new(rule);
    let mut buckets = Vec::new();

    for (local, close) in raw.local_points() {
        if let Some(bucket) = resampler.process(local, close) {
            buckets.push(bucket);
        }
    }

    if let Some(bucket) = resampler.finish() {
        buckets.push(bucket);
    }

    buckets
}

/// Resamples, derives percentage changes and labels a raw series.
///
/// # Errors
///
/// Returns [`CloselineError::NoDataFound`] if `raw` is empty.
pub fn transform(raw: &RawSeries, spec: IntervalSpec) -> Result<Analysis, CloselineError> {
    if raw.is_empty() {
        return Err(CloselineError::NoDataFound);
    }

    let buckets = resample(raw, spec.rule);

    let mut previous: Option<f64> = None;
    let rows = buckets
        .iter()
        .map(|closed| {
            let change = previous.and_then(|prev| pct_change(prev, closed.close));
            previous = Some(closed.close);
            ResampledRow {
                period: spec.rule.format_label(closed.bucket.stamp),
                bucket: closed.bucket.stamp,
                close: closed.close,
                pct_change: change,
            }
        })
        .collect();

    let table = ResultTable::new(rows);
    let summary = table.summary();

    debug!(
        interval = spec.label(),
        points = raw.len(),
        rows = table.len(),
        "resampled series"
    );

    Ok(Analysis { table, summary })
}
