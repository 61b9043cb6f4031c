//! CLI command implementations.

pub(crate) mod analyze;
pub(crate) mod interactive;
pub(crate) mod intervals;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use closeline_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Default look-back when no start date is given.
pub(crate) const DEFAULT_LOOKBACK_DAYS: u32 = 3 * 365;

/// Parses a `YYYY-MM-DD` date argument.
pub(crate) fn parse_date(value: &str, which: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid {which} date: {value}"))
}

/// Start date used when none is given.
pub(crate) fn default_start(end: NaiveDate) -> NaiveDate {
    DateRange::trailing_days(end, DEFAULT_LOOKBACK_DAYS).start
}

/// Normalises user input such as `weekly` to the canonical label.
///
/// Unrecognised input is passed through so the resolver reports it.
pub(crate) fn canonical_interval(input: &str) -> String {
    input
        .parse::<Interval>()
        .map_or_else(|_| input.to_string(), |interval| interval.label().to_string())
}

/// Runs one request behind a spinner.
pub(crate) async fn run_request(
    client: &YahooClient,
    request: &AnalysisRequest,
    quiet: bool,
) -> std::result::Result<Report, CloselineError> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!(
            "Fetching {} ({}) {}",
            request.ticker(),
            request.interval(),
            request.range()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let result = analyze(client, request).await;
    spinner.finish_and_clear();
    result
}

/// Hint shown after an empty or rejected request, e.g. the hourly history limit.
pub(crate) fn failure_hint(err: &anyhow::Error, interval: &str) -> Option<String> {
    match err.downcast_ref::<CloselineError>()? {
        CloselineError::NoDataFound | CloselineError::UpstreamFetch(_) => {
            no_data_hint(&resolve(&canonical_interval(interval)).ok()?)
        }
        _ => None,
    }
}

/// Prints a failed request as `Error: <message>` plus any hint.
pub(crate) fn report_failure(err: &anyhow::Error, interval: &str) {
    eprintln!("Error: {err:#}");
    if let Some(hint) = failure_hint(err, interval) {
        eprintln!("{hint}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-02-29 ", "start").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        let err = parse_date("29/02/2024", "end").unwrap_err();
        assert_eq!(err.to_string(), "Invalid end date: 29/02/2024");
    }

    #[test]
    fn test_default_start_is_three_years_back() {
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(default_start(end), NaiveDate::from_ymd_opt(2021, 6, 2).unwrap());
    }

    #[test]
    fn test_hourly_failures_carry_the_history_hint() {
        let hint = "Note: Hourly data is limited to the last 730 days.";

        let rejected = anyhow::Error::new(CloselineError::UpstreamFetch(
            "Chart API error [Unprocessable Entity]: must be within the last 730 days".into(),
        ));
        assert_eq!(failure_hint(&rejected, "hourly").as_deref(), Some(hint));

        let empty = anyhow::Error::new(CloselineError::NoDataFound);
        assert_eq!(failure_hint(&empty, "Hourly").as_deref(), Some(hint));
        assert_eq!(failure_hint(&empty, "Daily"), None);

        let other = anyhow::Error::new(CloselineError::EmptyTicker);
        assert_eq!(failure_hint(&other, "Hourly"), None);
        assert_eq!(failure_hint(&anyhow::anyhow!("Invalid start date: x"), "Hourly"), None);
    }

    #[test]
    fn test_canonical_interval() {
        assert_eq!(canonical_interval("weekly"), "Weekly");
        assert_eq!(canonical_interval(" HOURLY "), "Hourly");
        assert_eq!(canonical_interval("Biweekly"), "Biweekly");
    }
}
