//! Report preparation API
//!
//! `PreparedReport` runs the data steps of the pipeline (load, average
//! extraction, numeric coercion) and hands the application a cleaned table
//! plus its summary, ready for charting and printing.

use crate::coerce::coerce_numeric;
use crate::config::ReportConfig;
use crate::extract::{check_differences, extract_average};
use crate::loader::{load_results, read_results};
use crate::types::{Column, ResultsTable, Result, SummaryRow};
use std::io::Read;
use std::path::Path;

/// A cleaned results table and its averages
#[derive(Debug, Clone)]
pub struct PreparedReport {
    /// Trial rows only, all duration cells numeric
    pub table: ResultsTable,
    /// Averages for the run
    pub summary: SummaryRow,
}

impl PreparedReport {
    /// Load and prepare a results file
    ///
    /// # Example
    /// ```no_run
    /// use branch_report::{PreparedReport, ReportConfig};
    /// use std::path::Path;
    ///
    /// let report = PreparedReport::from_path(
    ///     Path::new("branch_prediction_results.csv"),
    ///     &ReportConfig::new(),
    /// ).unwrap();
    /// println!("{} trials", report.table.len());
    /// ```
    pub fn from_path(path: &Path, config: &ReportConfig) -> Result<Self> {
        let table = load_results(path)?;
        Self::from_table(table, config)
    }

    /// Prepare results read from any byte source
    pub fn from_reader<R: Read>(reader: R, config: &ReportConfig) -> Result<Self> {
        let table = read_results(reader)?;
        Self::from_table(table, config)
    }

    /// Prepare an already-loaded table
    pub fn from_table(mut table: ResultsTable, config: &ReportConfig) -> Result<Self> {
        let summary = extract_average(&mut table, config)?;
        coerce_numeric(&mut table)?;

        log::debug!(
            "Prepared {} trials ({} averages)",
            table.len(),
            summary.source
        );

        Ok(Self { table, summary })
    }

    /// Trial labels for the chart x-axis, in table order
    pub fn labels(&self) -> Vec<String> {
        self.table.labels()
    }

    /// Values of one duration column, in table order
    pub fn values(&self, column: Column) -> Vec<f64> {
        self.table
            .rows
            .iter()
            .map(|row| row.cell(column).as_number().unwrap_or(f64::NAN))
            .collect()
    }

    /// Row indices whose difference disagrees with the two timings
    pub fn inconsistent_rows(&self, config: &ReportConfig) -> Vec<usize> {
        check_differences(&self.table, config.difference_tolerance_ns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AverageSource, ReportError};

    #[test]
    fn test_prepare_from_reader() {
        let content = "Trial, Predictable (ns), Unpredictable (ns), Difference (ns)\n\
                       1, 5, 10, 5\n\
                       2, 7, 9, 2\n";
        let report = PreparedReport::from_reader(content.as_bytes(), &ReportConfig::new()).unwrap();

        assert!(report.table.is_numeric());
        assert_eq!(report.labels(), vec!["1", "2"]);
        assert_eq!(report.values(Column::Predictable), vec![5.0, 7.0]);
        assert_eq!(report.summary.source, AverageSource::Computed);
        assert!(report.inconsistent_rows(&ReportConfig::new()).is_empty());
    }

    #[test]
    fn test_parse_error_after_extraction() {
        let content = "Trial, Predictable (ns), Unpredictable (ns), Difference (ns)\n\
                       1, 5, 10, 5\n\
                       2, N/A, 9, 2\n\
                       Average, 6, 9.5, 3.5\n";

        let err = PreparedReport::from_reader(content.as_bytes(), &ReportConfig::new()).unwrap_err();
        match err {
            ReportError::Parse { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, Column::Predictable);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
