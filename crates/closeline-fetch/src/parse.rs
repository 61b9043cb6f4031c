//! Yahoo Finance chart JSON parsing.

use chrono::DateTime;
use closeline_types::{PricePoint, RawSeries, SeriesError, Tz};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Chart error code Yahoo uses for unknown or delisted symbols.
const NOT_FOUND_CODE: &str = "Not Found";

/// Errors that can occur while parsing a chart response.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Body is not the expected JSON shape.
    #[error("Invalid chart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Upstream reported an error in the chart envelope.
    #[error("Chart API error [{code}]: {description}")]
    Api {
        /// Error code from the envelope.
        code: String,
        /// Human-readable description.
        description: String,
    },

    /// Timestamp and close arrays differ in length.
    #[error("Chart has {timestamps} timestamps but {closes} closes")]
    LengthMismatch {
        /// Number of timestamps.
        timestamps: usize,
        /// Number of close values.
        closes: usize,
    },

    /// Timestamp outside the representable range.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Parsed points do not form a valid series.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<Meta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    #[serde(default)]
    exchange_timezone_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Parses a chart response body into a close-price series.
///
/// Null closes are skipped, points are ordered by timestamp and a repeated
/// timestamp keeps its last close. A `Not Found` chart error or a result
/// without timestamps yields an empty series.
///
/// # Errors
///
/// Returns an error if the body is malformed or reports any other chart error.
pub fn parse_chart(body: &[u8]) -> Result<RawSeries, ParseError> {
    let Envelope { chart } = serde_json::from_slice(body)?;

    if let Some(error) = chart.error {
        if error.code == NOT_FOUND_CODE {
            return Ok(RawSeries::empty());
        }
        return Err(ParseError::Api {
            code: error.code,
            description: error.description.unwrap_or_default(),
        });
    }

    let Some(result) = chart.result.and_then(|results| results.into_iter().next()) else {
        return Ok(RawSeries::empty());
    };

    let timezone = result
        .meta
        .and_then(|meta| meta.exchange_timezone_name)
        .map_or(Tz::UTC, |name| parse_timezone(&name));

    if result.timestamp.is_empty() {
        return Ok(RawSeries::empty().with_timezone(timezone));
    }

    let closes = result
        .indicators
        .and_then(|indicators| indicators.quote.into_iter().next())
        .map(|quote| quote.close)
        .unwrap_or_default();

    if closes.len() != result.timestamp.len() {
        return Err(ParseError::LengthMismatch {
            timestamps: result.timestamp.len(),
            closes: closes.len(),
        });
    }

    let mut points = Vec::with_capacity(closes.len());
    for (&secs, close) in result.timestamp.iter().zip(closes) {
        let Some(close) = close.filter(|c| c.is_finite()) else {
            continue;
        };
        let timestamp = DateTime::from_timestamp(secs, 0).ok_or(ParseError::InvalidTimestamp(secs))?;
        points.push(PricePoint::new(timestamp, close));
    }

    // Stable sort keeps arrival order among equal timestamps, so the
    // retained point is the last one received.
    points.sort_by_key(|point| point.timestamp);
    let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
    for point in points {
        match deduped.last_mut() {
            Some(last) if last.timestamp == point.timestamp => *last = point,
            _ => deduped.push(point),
        }
    }

    Ok(RawSeries::new(deduped)?.with_timezone(timezone))
}

fn parse_timezone(name: &str) -> Tz {
    name.parse().unwrap_or_else(|_| {
        warn!(timezone = name, "unrecognised exchange time zone, using UTC");
        Tz::UTC
    })
}
