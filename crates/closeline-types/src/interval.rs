//! Interval labels and the fixed fetch/resample table.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CloselineError;

/// Period the user wants prices summarised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// One row per hour.
    Hourly,
    /// One row per calendar day.
    #[default]
    Daily,
    /// One row per week, labelled by the week-ending Sunday.
    Weekly,
    /// One row per calendar quarter.
    Quarterly,
    /// One row per calendar year.
    Yearly,
}

impl Interval {
    /// Returns the canonical label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    /// Returns all intervals in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Hourly,
            Self::Daily,
            Self::Weekly,
            Self::Quarterly,
            Self::Yearly,
        ]
    }

    /// Returns the table entry for this interval.
    #[must_use]
    pub const fn spec(&self) -> IntervalSpec {
        SPECS[*self as usize]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Interval {
    type Err = CloselineError;

    /// Parses a label case-insensitively (`daily`, `Daily`, `DAILY`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|interval| interval.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CloselineError::UnknownInterval(s.to_string()))
    }
}

/// Sampling frequency requested from the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchGranularity {
    /// Hourly bars.
    Hourly,
    /// Daily bars.
    Daily,
}

impl FetchGranularity {
    /// Returns the granularity as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }

    /// How far back the upstream keeps history at this granularity, if limited.
    ///
    /// Only used to phrase a hint when a request comes back empty.
    #[must_use]
    pub const fn lookback_limit_days(&self) -> Option<u32> {
        match self {
            Self::Hourly => Some(730),
            Self::Daily => None,
        }
    }
}

impl std::fmt::Display for FetchGranularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How raw points are grouped into buckets before differencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleRule {
    /// Clock hours.
    Hourly,
    /// Calendar days.
    Daily,
    /// Monday through Sunday, stamped with the Sunday.
    Weekly,
    /// Calendar quarters, stamped with the quarter's last day.
    Quarterly,
    /// Calendar years, stamped with December 31.
    Yearly,
}

impl ResampleRule {
    /// Returns the rule as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Human-readable shape of the labels produced by [`Self::format_label`].
    #[must_use]
    pub const fn label_pattern(&self) -> &'static str {
        match self {
            Self::Hourly => "YYYY-MM-DD HH:MM",
            Self::Daily => "YYYY-MM-DD",
            Self::Weekly => "YYYY-MM-DD (week end)",
            Self::Quarterly => "YYYY-Q<n>",
            Self::Yearly => "YYYY",
        }
    }

    /// Formats a bucket stamp as a row label.
    #[must_use]
    pub fn format_label(&self, stamp: NaiveDateTime) -> String {
        match self {
            Self::Hourly => stamp.format("%Y-%m-%d %H:%M").to_string(),
            Self::Daily | Self::Weekly => stamp.format("%Y-%m-%d").to_string(),
            Self::Quarterly => format!("{}-Q{}", stamp.year(), quarter_of(stamp.month0())),
            Self::Yearly => stamp.format("%Y").to_string(),
        }
    }
}

impl std::fmt::Display for ResampleRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Calendar quarter (1..=4) of a zero-based month.
const fn quarter_of(month0: u32) -> u32 {
    month0 / 3 + 1
}

/// One row of the interval table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IntervalSpec {
    /// The interval this entry describes.
    pub interval: Interval,
    /// Granularity to request from the data source.
    pub granularity: FetchGranularity,
    /// Bucketing applied to the fetched series.
    pub rule: ResampleRule,
}

impl IntervalSpec {
    /// Returns the canonical label of the interval.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.interval.label()
    }
}

// Indexed by `Interval as usize`.
const SPECS: [IntervalSpec; 5] = [
    IntervalSpec {
        interval: Interval::Hourly,
        granularity: FetchGranularity::Hourly,
        rule: ResampleRule::Hourly,
    },
    IntervalSpec {
        interval: Interval::Daily,
        granularity: FetchGranularity::Daily,
        rule: ResampleRule::Daily,
    },
    IntervalSpec {
        interval: Interval::Weekly,
        granularity: FetchGranularity::Daily,
        rule: ResampleRule::Weekly,
    },
    IntervalSpec {
        interval: Interval::Quarterly,
        granularity: FetchGranularity::Daily,
        rule: ResampleRule::Quarterly,
    },
    IntervalSpec {
        interval: Interval::Yearly,
        granularity: FetchGranularity::Daily,
        rule: ResampleRule::Yearly,
    },
];

/// Looks up the table entry for an exact interval label.
///
/// # Errors
///
/// Returns [`CloselineError::UnknownInterval`] if `label` is not one of
/// `Hourly`, `Daily`, `Weekly`, `Quarterly` or `Yearly`.
pub fn resolve(label: &str) -> Result<IntervalSpec, CloselineError> {
    SPECS
        .iter()
        .find(|spec| spec.label() == label)
        .copied()
        .ok_or_else(|| CloselineError::UnknownInterval(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_resolve_table() {
        let hourly = resolve("Hourly").unwrap();
        assert_eq!(hourly.granularity, FetchGranularity::Hourly);
        assert_eq!(hourly.rule, ResampleRule::Hourly);

        for label in ["Daily", "Weekly", "Quarterly", "Yearly"] {
            let spec = resolve(label).unwrap();
            assert_eq!(spec.granularity, FetchGranularity::Daily);
            assert_eq!(spec.label(), label);
        }

        assert_eq!(resolve("Weekly").unwrap().rule, ResampleRule::Weekly);
        assert_eq!(resolve("Quarterly").unwrap().rule, ResampleRule::Quarterly);
        assert_eq!(resolve("Yearly").unwrap().rule, ResampleRule::Yearly);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("Biweekly").unwrap_err();
        assert!(matches!(err, CloselineError::UnknownInterval(ref s) if s == "Biweekly"));

        // Exact match only; case-insensitive parsing lives in FromStr.
        assert!(resolve("daily").is_err());
    }

    #[test]
    fn test_spec_indexing_matches_interval() {
        for interval in Interval::all() {
            assert_eq!(interval.spec().interval, *interval);
            assert_eq!(resolve(interval.label()).unwrap(), interval.spec());
        }
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!("daily".parse::<Interval>().unwrap(), Interval::Daily);
        assert_eq!(" QUARTERLY ".parse::<Interval>().unwrap(), Interval::Quarterly);
        assert!("fortnightly".parse::<Interval>().is_err());
        assert_eq!(Interval::default(), Interval::Daily);
    }

    #[test]
    fn test_format_labels() {
        let ts = stamp(2023, 8, 15, 9, 0);
        assert_eq!(ResampleRule::Hourly.format_label(ts), "2023-08-15 09:00");
        assert_eq!(ResampleRule::Daily.format_label(ts), "2023-08-15");
        assert_eq!(ResampleRule::Weekly.format_label(ts), "2023-08-15");
        assert_eq!(ResampleRule::Quarterly.format_label(ts), "2023-Q3");
        assert_eq!(ResampleRule::Yearly.format_label(ts), "2023");

        let new_year = stamp(2023, 1, 1, 0, 0);
        assert_eq!(ResampleRule::Quarterly.format_label(new_year), "2023-Q1");
    }

    #[test]
    fn test_quarter_of() {
        let quarters: Vec<u32> = (0..12).map(quarter_of).collect();
        assert_eq!(quarters, [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn test_lookback_hint() {
        assert_eq!(FetchGranularity::Hourly.lookback_limit_days(), Some(730));
        assert_eq!(FetchGranularity::Daily.lookback_limit_days(), None);
    }
}
