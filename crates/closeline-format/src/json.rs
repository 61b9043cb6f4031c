//! JSON output format.

use closeline_aggregate::Analysis;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One document holding the rows and the summary.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL), one row per line.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for document style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_analysis<W: Write + Send>(
        &self,
        analysis: &Analysis,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, analysis)?;
                } else {
                    serde_json::to_writer(&mut writer, analysis)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for row in &analysis.table {
                    serde_json::to_writer(&mut writer, row)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
