//! Calendar date range for a price request.

use chrono::{Days, NaiveDate, NaiveTime};

use crate::DateRangeError;

/// A range of dates for data retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date, passed through to the data source as given.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the range covering `days` days up to and including `end`.
    #[must_use]
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Unix seconds of the start date at 00:00 UTC.
    #[must_use]
    pub fn start_timestamp(&self) -> i64 {
        midnight_utc(self.start)
    }

    /// Unix seconds of the end date at 00:00 UTC.
    #[must_use]
    pub fn end_timestamp(&self) -> i64 {
        midnight_utc(self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_new() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(range.start, start);
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_date_range_invalid() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            DateRange::new(start, end),
            Err(DateRangeError::InvalidRange { start, end })
        );
    }

    #[test]
    fn test_trailing_days() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = DateRange::trailing_days(end, 365 * 3);

        assert_eq!(range.start, NaiveDate::from_ymd_opt(2021, 3, 2).unwrap());
        assert_eq!(range.end, end);
    }

    #[test]
    fn test_timestamps() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let range = DateRange::new(day, day).unwrap();
        assert_eq!(range.start_timestamp(), 1_704_067_200);
        assert_eq!(range.end_timestamp(), 1_704_067_200);
    }
}
