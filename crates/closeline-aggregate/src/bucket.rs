//! Calendar bucket boundaries for each resample rule.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use closeline_types::ResampleRule;

/// A half-open span of local time that collapses to one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bucket {
    /// First instant in the bucket (inclusive).
    pub start: NaiveDateTime,
    /// First instant after the bucket (exclusive).
    pub end: NaiveDateTime,
    /// Instant the row label is formatted from.
    ///
    /// Hourly and daily buckets are stamped with their start; weekly,
    /// quarterly and yearly buckets with their last day.
    pub stamp: NaiveDateTime,
}

impl Bucket {
    /// Returns true if `local` falls inside the bucket.
    #[must_use]
    pub fn contains(&self, local: NaiveDateTime) -> bool {
        local >= self.start && local < self.end
    }
}

/// Returns the bucket that `local` belongs to under `rule`.
#[must_use]
pub fn bucket_for(rule: ResampleRule, local: NaiveDateTime) -> Bucket {
    let date = local.date();
    match rule {
        ResampleRule::Hourly => {
            let start = midnight(date) + TimeDelta::hours(i64::from(local.hour()));
            Bucket {
                start,
                end: start + TimeDelta::hours(1),
                stamp: start,
            }
        }
        ResampleRule::Daily => {
            let start = midnight(date);
            Bucket {
                start,
                end: midnight(add_days(date, 1)),
                stamp: start,
            }
        }
        ResampleRule::Weekly => {
            let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
            Bucket {
                start: midnight(monday),
                end: midnight(add_days(monday, 7)),
                stamp: midnight(add_days(monday, 6)),
            }
        }
        ResampleRule::Quarterly => {
            let month_start = date - Days::new(u64::from(date.day0()));
            let quarter_start = month_start - Months::new(date.month0() % 3);
            period_ending(quarter_start, 3)
        }
        ResampleRule::Yearly => {
            let year_start = date - Days::new(u64::from(date.ordinal0()));
            period_ending(year_start, 12)
        }
    }
}

/// Bucket of `months` calendar months from `start`, stamped with its last day.
fn period_ending(start: NaiveDate, months: u32) -> Bucket {
    let next = start
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX);
    let last_day = next.pred_opt().unwrap_or(start);
    Bucket {
        start: midnight(start),
        end: midnight(next),
        stamp: midnight(last_day),
    }
}

fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}
