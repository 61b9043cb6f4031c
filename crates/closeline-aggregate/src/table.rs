//! Result table and summary statistics.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One resampled period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampledRow {
    /// Formatted period label (`2024-01-07`, `2023-Q3`, ...).
    pub period: String,
    /// Exchange-local instant the label was formatted from.
    pub bucket: NaiveDateTime,
    /// Last close observed in the period.
    pub close: f64,
    /// Percent change against the previous row; absent on the first row and
    /// after a zero close.
    pub pct_change: Option<f64>,
}

/// Resampled rows in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResampledRow>,
}

impl ResultTable {
    /// Creates a table from rows already in chronological order.
    #[must_use]
    pub const fn new(rows: Vec<ResampledRow>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[ResampledRow] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ResampledRow> {
        self.rows.iter()
    }

    /// Iterates the defined percentage changes.
    pub fn changes(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(|row| row.pct_change)
    }

    /// Computes the change extremes, if any change is defined.
    #[must_use]
    pub fn summary(&self) -> Option<SummaryStats> {
        SummaryStats::from_changes(self.changes())
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResampledRow;
    type IntoIter = std::slice::Iter<'a, ResampledRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Largest and smallest percentage change in a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Highest percent change.
    pub max_pct_change: f64,
    /// Lowest percent change.
    pub min_pct_change: f64,
}

impl SummaryStats {
    /// Scans changes for their extremes; `None` for an empty input.
    pub fn from_changes(changes: impl IntoIterator<Item = f64>) -> Option<Self> {
        changes.into_iter().fold(None, |acc, change| {
            Some(match acc {
                None => Self {
                    max_pct_change: change,
                    min_pct_change: change,
                },
                Some(stats) => Self {
                    max_pct_change: stats.max_pct_change.max(change),
                    min_pct_change: stats.min_pct_change.min(change),
                },
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: u32, close: f64, pct_change: Option<f64>) -> ResampledRow {
        let bucket = NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ResampledRow {
            period: bucket.format("%Y-%m-%d").to_string(),
            bucket,
            close,
            pct_change,
        }
    }

    #[test]
    fn test_summary_extremes() {
        let table = ResultTable::new(vec![
            row(1, 100.0, None),
            row(2, 110.0, Some(10.0)),
            row(3, 99.0, Some(-10.0)),
            row(4, 100.0, Some(1.0)),
        ]);

        let stats = table.summary().unwrap();
        assert!((stats.max_pct_change - 10.0).abs() < 1e-12);
        assert!((stats.min_pct_change + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_summary_absent_without_changes() {
        let table = ResultTable::new(vec![row(1, 100.0, None)]);
        assert_eq!(table.summary(), None);
        assert_eq!(ResultTable::default().summary(), None);
    }

    #[test]
    fn test_single_change_is_both_extremes() {
        let stats = SummaryStats::from_changes([2.5]).unwrap();
        assert!((stats.max_pct_change - 2.5).abs() < 1e-12);
        assert!((stats.min_pct_change - 2.5).abs() < 1e-12);
    }
}
