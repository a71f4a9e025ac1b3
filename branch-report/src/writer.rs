//! Results file writer
//!
//! Writes a table back out in the exact layout the benchmark produces:
//! `", "` separators, leading-space headers and an optional trailing summary
//! row, so other tools that read the benchmark's files can read ours.

use crate::loader::csv_error;
use crate::types::{Column, ResultsTable, Result, SummaryRow, TRIAL_HEADER};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix the benchmark's separator space unless the field will be quoted
///
/// A space before an opening quote would make the quote part of the value.
fn padded(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        value.to_string()
    } else {
        format!(" {}", value)
    }
}

/// Write `table` (and `summary` as a trailing `average_label` row) to `writer`
pub fn write_results<W: Write>(
    writer: W,
    table: &ResultsTable,
    summary: Option<&SummaryRow>,
    average_label: &str,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    let mut header: Vec<String> = vec![TRIAL_HEADER.to_string()];
    header.extend(Column::ALL.iter().map(|c| c.raw_header().to_string()));
    header.extend(table.extra_columns.iter().map(|name| padded(name)));
    wtr.write_record(&header).map_err(csv_error)?;

    for row in &table.rows {
        let mut record = vec![row.trial.clone()];
        record.extend(Column::ALL.iter().map(|&c| padded(&row.cell(c).to_string())));
        record.extend(row.extra.iter().map(|v| padded(v)));
        wtr.write_record(&record).map_err(csv_error)?;
    }

    if let Some(summary) = summary {
        let mut record = vec![average_label.to_string()];
        record.extend(Column::ALL.iter().map(|&c| padded(&summary.get(c).to_string())));
        record.extend(table.extra_columns.iter().map(|_| " ".to_string()));
        wtr.write_record(&record).map_err(csv_error)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write results to a file, replacing it if it exists
pub fn save_results(
    path: &Path,
    table: &ResultsTable,
    summary: Option<&SummaryRow>,
    average_label: &str,
) -> Result<()> {
    log::info!("Writing {} rows to {:?}", table.len(), path);
    let file = File::create(path)?;
    write_results(file, table, summary, average_label)
}
