//! Analyze command implementation.
//!
//! One request from command-line arguments, written to stdout or a file.

use crate::display::{Format, emit_report};
use anyhow::Result;
use closeline_lib::prelude::*;
use std::path::PathBuf;

use super::{canonical_interval, default_start, parse_date, run_request};

/// Fetch, resample and print one ticker.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn analyze(
    config: ClientConfig,
    ticker: &str,
    interval: &str,
    start_str: Option<&str>,
    end_str: Option<&str>,
    format: Format,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    // Parse end date (default to today)
    let end = match end_str {
        Some(s) => parse_date(s, "end")?,
        None => chrono::Local::now().date_naive(),
    };

    // Parse start date (default to three years before the end)
    let start = match start_str {
        Some(s) => parse_date(s, "start")?,
        None => default_start(end),
    };

    let range = DateRange::new(start, end)?;
    let request = AnalysisRequest::new(ticker, canonical_interval(interval), range);

    let client = YahooClient::new(config)?;
    let report = run_request(&client, &request, quiet).await?;

    emit_report(&report, format, output.as_deref())?;

    if let Some(path) = &output
        && !quiet
    {
        eprintln!("Output written to: {}", path.display());
    }

    Ok(())
}
