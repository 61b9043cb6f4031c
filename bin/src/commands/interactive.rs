//! Interactive mode.
//!
//! Prompts for ticker, interval and dates, runs the request and asks whether
//! to go again. A failed request is reported and the session continues.

use crate::display::{Format, emit_report};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use closeline_lib::prelude::*;
use inquire::{Confirm, CustomType, InquireError, Select, Text};

use super::{default_start, report_failure, run_request};

const DEFAULT_TICKER: &str = "SPY";

/// Inputs collected from one round of prompts.
struct Answers {
    ticker: String,
    interval: Interval,
    start: NaiveDate,
    end: NaiveDate,
}

/// Maps a cancelled prompt to `None` so the session can end quietly.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(InquireError::NotTTY) => {
            anyhow::bail!("Interactive mode needs a terminal; try `closeline analyze <TICKER>`")
        }
        Err(err) => Err(err).context("Prompt failed"),
    }
}

fn prompt_date(message: &str, default: NaiveDate) -> Result<Option<NaiveDate>> {
    answered(
        CustomType::<NaiveDate>::new(message)
            .with_default(default)
            .with_help_message("YYYY-MM-DD")
            .with_error_message("Please type a date as YYYY-MM-DD")
            .prompt(),
    )
}

fn prompt_answers(previous: Option<&Answers>) -> Result<Option<Answers>> {
    let today = chrono::Local::now().date_naive();
    let ticker_default = previous.map_or(DEFAULT_TICKER, |a| a.ticker.as_str());
    let interval_default = previous.map_or(Interval::default(), |a| a.interval);

    let Some(ticker) = answered(
        Text::new("Ticker:")
            .with_default(ticker_default)
            .with_help_message("e.g. SPY, AAPL, ^GSPC")
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let intervals = Interval::all().to_vec();
    let cursor = intervals
        .iter()
        .position(|i| *i == interval_default)
        .unwrap_or_default();
    let Some(interval) = answered(
        Select::new("Interval:", intervals)
            .with_starting_cursor(cursor)
            .prompt(),
    )?
    else {
        return Ok(None);
    };

    let end_default = previous.map_or(today, |a| a.end);
    let start_default = previous.map_or_else(|| default_start(end_default), |a| a.start);

    let Some(start) = prompt_date("Start date:", start_default)? else {
        return Ok(None);
    };
    let Some(end) = prompt_date("End date:", end_default)? else {
        return Ok(None);
    };

    Ok(Some(Answers {
        ticker,
        interval,
        start,
        end,
    }))
}

async fn run_once(client: &YahooClient, answers: &Answers, quiet: bool) -> Result<()> {
    let range = DateRange::new(answers.start, answers.end)?;
    let request = AnalysisRequest::new(&answers.ticker, answers.interval.label(), range);
    let report = run_request(client, &request, quiet).await?;
    println!();
    emit_report(&report, Format::Table, None)
}

/// Run requests from prompts until the user stops.
pub(crate) async fn interactive(config: ClientConfig, quiet: bool) -> Result<()> {
    let client = YahooClient::new(config)?;
    let mut previous: Option<Answers> = None;

    loop {
        let Some(answers) = prompt_answers(previous.as_ref())? else {
            break;
        };

        if let Err(err) = run_once(&client, &answers, quiet).await {
            report_failure(&err, answers.interval.label());
        }

        let again = answered(
            Confirm::new("Run another analysis?")
                .with_default(true)
                .prompt(),
        )?;
        if again != Some(true) {
            break;
        }
        previous = Some(answers);
    }

    Ok(())
}
