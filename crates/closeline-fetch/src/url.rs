//! Yahoo Finance chart URL construction.

use closeline_types::{DateRange, FetchGranularity};
use reqwest::Url;

/// Base URL of the Yahoo Finance v8 chart endpoint.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Returns the `interval` query value for a granularity.
#[must_use]
pub const fn interval_param(granularity: FetchGranularity) -> &'static str {
    match granularity {
        FetchGranularity::Hourly => "1h",
        FetchGranularity::Daily => "1d",
    }
}

/// Builds the chart URL for a ticker, date range and granularity.
///
/// URL format: `{base}/{TICKER}?period1={start}&period2={end}&interval={1h|1d}&includePrePost=false`
///
/// Both periods are midnight UTC of the given dates; the upstream treats
/// `period2` as exclusive.
///
/// Returns `None` if `base` is not an absolute hierarchical URL.
///
/// # Example
///
/// ```
/// use closeline_fetch::url::{BASE_URL, chart_url};
/// use closeline_types::{DateRange, FetchGranularity};
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// ).unwrap();
/// let url = chart_url(BASE_URL, "AAPL", &range, FetchGranularity::Daily).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://query1.finance.yahoo.com/v8/finance/chart/AAPL?period1=1704067200&period2=1706659200&interval=1d&includePrePost=false"
/// );
/// ```
#[must_use]
pub fn chart_url(
    base: &str,
    ticker: &str,
    range: &DateRange,
    granularity: FetchGranularity,
) -> Option<Url> {
    let mut url = Url::parse(base).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push(ticker.trim());
    url.query_pairs_mut()
        .append_pair("period1", &range.start_timestamp().to_string())
        .append_pair("period2", &range.end_timestamp().to_string())
        .append_pair("interval", interval_param(granularity))
        .append_pair("includePrePost", "false");
    Some(url)
}
