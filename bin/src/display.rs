//! Display utilities and output formatting for the closeline CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use closeline_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Table,
    Csv,
    Json,
    Ndjson,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Table => Self::Table,
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

/// Writes a report in `format` to `writer`.
pub(crate) fn write_report<W: Write + Send>(
    report: &Report,
    format: Format,
    writer: W,
) -> Result<()> {
    match format {
        Format::Table => TableFormatter::new()
            .with_title(report.heading())
            .write_analysis(&report.analysis, writer)?,
        Format::Csv => CsvFormatter::new().write_analysis(&report.analysis, writer)?,
        Format::Json => JsonFormatter::new().write_analysis(&report.analysis, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_analysis(&report.analysis, writer)?,
    }
    Ok(())
}

/// Writes a report to `output`, or to stdout when no path is given.
pub(crate) fn emit_report(report: &Report, format: Format, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(report, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = std::io::stdout();
            write_report(report, format, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
