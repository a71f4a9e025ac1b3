//! Results file loader
//!
//! Reads the comma-delimited file written by the branch prediction benchmark
//! into a `ResultsTable`. The benchmark writes `", "` separators, so headers
//! and cells are trimmed on read; ` Predictable (ns)` and `Predictable (ns)`
//! name the same column.

use crate::types::{Cell, Column, ReportError, ResultsTable, Result, TrialRow, TRIAL_HEADER};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Positions of the required columns within a header record
struct HeaderLayout {
    trial: usize,
    durations: [usize; 3],
    extra: Vec<(usize, String)>,
}

impl HeaderLayout {
    fn from_record(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);

        let trial = find(TRIAL_HEADER).ok_or_else(|| missing_column(TRIAL_HEADER, headers))?;

        let mut durations = [0usize; 3];
        for (slot, column) in durations.iter_mut().zip(Column::ALL) {
            *slot = find(column.header()).ok_or_else(|| missing_column(column.header(), headers))?;
        }

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != trial && !durations.contains(i))
            .map(|(i, h)| (i, h.to_string()))
            .collect();

        Ok(Self {
            trial,
            durations,
            extra,
        })
    }

    fn row(&self, record: &csv::StringRecord) -> TrialRow {
        let field = |i: usize| record.get(i).unwrap_or_default();
        let [p, u, d] = self.durations;

        TrialRow::new(
            field(self.trial),
            Cell::from(field(p)),
            Cell::from(field(u)),
            Cell::from(field(d)),
        )
        .with_extra(self.extra.iter().map(|(i, _)| field(*i).to_string()).collect())
    }
}

fn missing_column(name: &str, headers: &csv::StringRecord) -> ReportError {
    let found: Vec<&str> = headers.iter().collect();
    ReportError::Format(format!("Missing column '{}' in header {:?}", name, found))
}

pub(crate) fn csv_error(e: csv::Error) -> ReportError {
    if e.is_io_error() {
        if let csv::ErrorKind::Io(io_err) = e.into_kind() {
            return ReportError::Io(io_err);
        }
        return ReportError::Format("Unknown CSV I/O failure".to_string());
    }
    ReportError::Format(e.to_string())
}

/// Load a results file from disk
///
/// # Arguments
/// * `path` - Path to the CSV written by the benchmark
///
/// # Returns
/// * `Result<ResultsTable>` - All rows in file order, including a trailing
///   average row if present
///
/// # Example
/// ```no_run
/// use branch_report::loader::load_results;
/// use std::path::Path;
///
/// let table = load_results(Path::new("branch_prediction_results.csv")).unwrap();
/// println!("{} rows", table.len());
/// ```
pub fn load_results(path: &Path) -> Result<ResultsTable> {
    log::info!("Loading results file: {:?}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::NotFound(path.to_path_buf()),
        _ => ReportError::Io(e),
    })?;

    let table = read_results(file)?;

    log::info!("Loaded {} rows from {:?}", table.len(), path);
    Ok(table)
}

/// Read results from any byte source
pub fn read_results<R: Read>(reader: R) -> Result<ResultsTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let layout = HeaderLayout::from_record(&headers)?;
    log::debug!("Header layout: {:?}", headers);

    let mut table = ResultsTable {
        extra_columns: layout.extra.iter().map(|(_, name)| name.clone()).collect(),
        rows: Vec::new(),
    };

    for record in rdr.records() {
        let record = record.map_err(csv_error)?;
        table.rows.push(layout.row(&record));
    }

    if !table.extra_columns.is_empty() {
        log::debug!("Keeping extra columns: {:?}", table.extra_columns);
    }

    Ok(table)
}
