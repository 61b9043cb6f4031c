//! One analysis request, end to end.

use closeline_aggregate::{Analysis, transform};
use closeline_fetch::PriceSource;
use closeline_types::{CloselineError, DateRange, IntervalSpec, resolve};
use tracing::{debug, info};

/// Immutable inputs for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    ticker: String,
    interval: String,
    range: DateRange,
}

impl AnalysisRequest {
    /// Creates a request; the ticker is trimmed, nothing else is checked.
    #[must_use]
    pub fn new(ticker: impl Into<String>, interval: impl Into<String>, range: DateRange) -> Self {
        let ticker: String = ticker.into();
        Self {
            ticker: ticker.trim().to_string(),
            interval: interval.into(),
            range,
        }
    }

    /// Returns the ticker.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Returns the interval label as supplied.
    #[must_use]
    pub fn interval(&self) -> &str {
        &self.interval
    }

    /// Returns the date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Ticker the data was fetched for.
    pub ticker: String,
    /// Resolved interval.
    pub spec: IntervalSpec,
    /// Requested date range.
    pub range: DateRange,
    /// Table and summary.
    pub analysis: Analysis,
}

impl Report {
    /// Heading for display, e.g. `Results for SPY (Daily)`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Results for {} ({})", self.ticker, self.spec.label())
    }
}

/// Resolves the interval, fetches the series and transforms it.
///
/// The interval is resolved before anything is fetched, so an unknown label
/// never reaches the source. Source failures are not retried.
///
/// # Errors
///
/// Returns [`CloselineError::UnknownInterval`], [`CloselineError::EmptyTicker`],
/// [`CloselineError::UpstreamFetch`] or [`CloselineError::NoDataFound`].
#[tracing::instrument(
    skip(source, request),
    fields(ticker = %request.ticker(), interval = %request.interval(), range = %request.range())
)]
pub async fn analyze<S>(source: &S, request: &AnalysisRequest) -> Result<Report, CloselineError>
where
    S: PriceSource + ?Sized,
{
    let spec = resolve(request.interval())?;
    if request.ticker().is_empty() {
        return Err(CloselineError::EmptyTicker);
    }

    debug!(granularity = %spec.granularity, rule = %spec.rule, "fetching series");
    let raw = source
        .fetch(request.ticker(), request.range(), spec.granularity)
        .await
        .map_err(|e| CloselineError::UpstreamFetch(e.to_string()))?;
    info!(points = raw.len(), "fetched series");

    let analysis = transform(&raw, spec)?;

    Ok(Report {
        ticker: request.ticker().to_string(),
        spec,
        range: request.range(),
        analysis,
    })
}

/// Extra guidance to show next to [`CloselineError::NoDataFound`] or an
/// upstream rejection of the requested range.
#[must_use]
pub fn no_data_hint(spec: &IntervalSpec) -> Option<String> {
    spec.granularity.lookback_limit_days().map(|days| {
        format!(
            "Note: {} data is limited to the last {days} days.",
            spec.label()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, TimeZone, Utc};
    use closeline_fetch::FetchError;
    use closeline_types::{FetchGranularity, Interval, PricePoint, RawSeries};
    use std::sync::Mutex;

    /// Records calls and replays a canned answer.
    #[derive(Debug, Default)]
    struct FakeSource {
        closes: Vec<f64>,
        fail_with_status: Option<u16>,
        calls: Mutex<Vec<(String, FetchGranularity)>>,
    }

    impl FakeSource {
        fn with_closes(closes: &[f64]) -> Self {
            Self {
                closes: closes.to_vec(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(String, FetchGranularity)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PriceSource for FakeSource {
        async fn fetch(
            &self,
            ticker: &str,
            range: DateRange,
            granularity: FetchGranularity,
        ) -> Result<RawSeries, FetchError> {
            self.calls
                .lock()
                .unwrap()
                .push((ticker.to_string(), granularity));
            if let Some(status) = self.fail_with_status {
                return Err(FetchError::Status { status });
            }
            let start = range.start.and_hms_opt(21, 0, 0).unwrap().and_utc();
            let points = self
                .closes
                .iter()
                .enumerate()
                .map(|(i, close)| {
                    PricePoint::new(start + chrono::TimeDelta::days(i as i64), *close)
                })
                .collect();
            Ok(RawSeries::new(points).unwrap())
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_analyze_daily() {
        let source = FakeSource::with_closes(&[100.0, 110.0, 99.0]);
        let request = AnalysisRequest::new(" SPY ", "Daily", range());

        let report = analyze(&source, &request).await.unwrap();

        assert_eq!(report.heading(), "Results for SPY (Daily)");
        assert_eq!(report.analysis.table.len(), 3);
        let summary = report.analysis.summary.unwrap();
        assert!((summary.max_pct_change - 10.0).abs() < 1e-9);
        assert_eq!(source.calls(), [("SPY".to_string(), FetchGranularity::Daily)]);
    }

    #[tokio::test]
    async fn test_hourly_requests_hourly_granularity() {
        let source = FakeSource::with_closes(&[1.0]);
        let request = AnalysisRequest::new("SPY", "Hourly", range());

        analyze(&source, &request).await.unwrap();
        assert_eq!(source.calls()[0].1, FetchGranularity::Hourly);
    }

    #[tokio::test]
    async fn test_unknown_interval_never_fetches() {
        let source = FakeSource::with_closes(&[1.0]);
        let request = AnalysisRequest::new("SPY", "Biweekly", range());

        let err = analyze(&source, &request).await.unwrap_err();
        assert!(matches!(err, CloselineError::UnknownInterval(_)));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_ticker() {
        let source = FakeSource::with_closes(&[1.0]);
        let request = AnalysisRequest::new("   ", "Daily", range());

        let err = analyze(&source, &request).await.unwrap_err();
        assert!(matches!(err, CloselineError::EmptyTicker));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_series_is_no_data() {
        let source = FakeSource::with_closes(&[]);
        let request = AnalysisRequest::new("SPY", "Weekly", range());

        let err = analyze(&source, &request).await.unwrap_err();
        assert!(matches!(err, CloselineError::NoDataFound));
    }

    #[tokio::test]
    async fn test_upstream_failure_passes_through_once() {
        let source = FakeSource {
            fail_with_status: Some(503),
            ..Default::default()
        };
        let request = AnalysisRequest::new("SPY", "Daily", range());

        let err = analyze(&source, &request).await.unwrap_err();
        assert!(matches!(err, CloselineError::UpstreamFetch(ref msg) if msg.contains("503")));
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let source: Box<dyn PriceSource> = Box::new(FakeSource::with_closes(&[1.0, 2.0]));
        let request = AnalysisRequest::new("SPY", "Yearly", range());

        let report = analyze(source.as_ref(), &request).await.unwrap();
        assert_eq!(report.analysis.table.rows()[0].period, "2024");
    }

    #[test]
    fn test_no_data_hint() {
        assert_eq!(
            no_data_hint(&Interval::Hourly.spec()).as_deref(),
            Some("Note: Hourly data is limited to the last 730 days.")
        );
        assert_eq!(no_data_hint(&Interval::Daily.spec()), None);
    }

    #[test]
    fn test_request_is_trimmed() {
        let request = AnalysisRequest::new("\tAAPL\n", "Daily", range());
        assert_eq!(request.ticker(), "AAPL");
        assert_eq!(
            Utc.from_utc_datetime(&request.range().start.and_hms_opt(0, 0, 0).unwrap())
                .timestamp(),
            request.range().start_timestamp()
        );
    }
}
