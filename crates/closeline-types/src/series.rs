//! Raw close-price series as delivered by a data source.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::SeriesError;

/// A single observed close price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Bar timestamp (UTC).
    pub timestamp: DateTime<Utc>,
    /// Close price of the bar.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Close prices for one ticker over one date range at one granularity.
///
/// Timestamps are strictly increasing and every close is finite. The series
/// also records the exchange time zone, which decides where calendar
/// boundaries fall when the series is resampled.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    points: Vec<PricePoint>,
    timezone: Tz,
}

impl RawSeries {
    /// Creates a UTC series, validating ordering and values.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp does not follow its predecessor or a
    /// close price is not finite.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }
            if index > 0 && point.timestamp <= points[index - 1].timestamp {
                return Err(SeriesError::NotIncreasing { index });
            }
        }
        Ok(Self {
            points,
            timezone: Tz::UTC,
        })
    }

    /// Creates an empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            points: Vec::new(),
            timezone: Tz::UTC,
        }
    }

    /// Sets the exchange time zone.
    #[must_use]
    pub const fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns the exchange time zone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the points in chronological order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterates the points as exchange-local wall-clock times.
    pub fn local_points(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.points.iter().map(|point| {
            (
                point.timestamp.with_timezone(&self.timezone).naive_local(),
                point.close,
            )
        })
    }
}

impl Default for RawSeries {
    fn default() -> Self {
        Self::empty()
    }
}
