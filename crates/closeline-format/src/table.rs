//! Human-readable terminal table.

use closeline_aggregate::{Analysis, SummaryStats};
use std::io::Write;

use crate::{FormatError, Formatter};

const PERIOD_HEADER: &str = "Period";
const CLOSE_HEADER: &str = "Close Price";
const CHANGE_HEADER: &str = "Pct Change";

/// Formats a close price with two decimals.
#[must_use]
pub fn format_price(close: f64) -> String {
    format!("{close:.2}")
}

/// Formats a percentage change with two decimals and a `%` suffix.
#[must_use]
pub fn format_change(change: f64) -> String {
    format!("{change:.2}%")
}

/// Aligned table with the change extremes above it.
#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    title: Option<String>,
    include_summary: bool,
}

impl TableFormatter {
    /// Creates a table formatter that prints the summary block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            include_summary: true,
        }
    }

    /// Sets a heading printed above everything else.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets whether to print the highest/lowest change block.
    #[must_use]
    pub const fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }

    fn write_summary<W: Write>(summary: &SummaryStats, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "Highest % Change: {}",
            format_change(summary.max_pct_change)
        )?;
        writeln!(
            writer,
            "Lowest % Change: {}",
            format_change(summary.min_pct_change)
        )?;
        writeln!(writer)
    }
}

impl Formatter for TableFormatter {
    fn write_analysis<W: Write + Send>(
        &self,
        analysis: &Analysis,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if let Some(title) = &self.title {
            writeln!(writer, "{title}")?;
            writeln!(writer)?;
        }

        if self.include_summary
            && let Some(summary) = &analysis.summary
        {
            Self::write_summary(summary, &mut writer)?;
        }

        let rows = analysis.table.rows();
        let period_width = rows
            .iter()
            .map(|row| row.period.len())
            .chain(std::iter::once(PERIOD_HEADER.len()))
            .max()
            .unwrap_or(PERIOD_HEADER.len());
        let close_width = rows
            .iter()
            .map(|row| format_price(row.close).len())
            .chain(std::iter::once(CLOSE_HEADER.len()))
            .max()
            .unwrap_or(CLOSE_HEADER.len());
        let change_width = CHANGE_HEADER.len().max(
            analysis
                .table
                .changes()
                .map(|change| format_change(change).len())
                .max()
                .unwrap_or(0),
        );

        writeln!(
            writer,
            "{PERIOD_HEADER:<period_width$}  {CLOSE_HEADER:>close_width$}  {CHANGE_HEADER:>change_width$}"
        )?;
        writeln!(
            writer,
            "{}",
            "-".repeat(period_width + close_width + change_width + 4)
        )?;

        for row in rows {
            let change = row.pct_change.map(format_change).unwrap_or_default();
            let line = format!(
                "{:<period_width$}  {:>close_width$}  {:>change_width$}",
                row.period,
                format_price(row.close),
                change
            );
            writeln!(writer, "{}", line.trim_end())?;
        }

        writeln!(writer)?;
        writeln!(writer, "Total: {} periods", rows.len())?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
