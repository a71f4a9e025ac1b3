//! Average extraction
//!
//! The benchmark appends an `Average` row after the trials. When it is present
//! its values are used as-is and the row is dropped from the working table, so
//! charts only see genuine trials. Otherwise the averages are computed here.

use crate::config::ReportConfig;
use crate::types::{AverageSource, Column, ReportError, ResultsTable, Result, SummaryRow};

/// Determine the summary row, removing a trailing average row if present
pub fn extract_average(table: &mut ResultsTable, config: &ReportConfig) -> Result<SummaryRow> {
    let last = table.rows.last().ok_or(ReportError::EmptyInput)?;

    if config.is_average_label(&last.trial) {
        let index = table.len() - 1;
        let summary = SummaryRow {
            predictable_ns: last.parse_value(index, Column::Predictable)?,
            unpredictable_ns: last.parse_value(index, Column::Unpredictable)?,
            difference_ns: last.parse_value(index, Column::Difference)?,
            source: AverageSource::Precomputed,
        };
        table.rows.pop();

        log::info!(
            "Using pre-computed '{}' row; {} trial rows remain",
            config.average_label,
            table.len()
        );
        return Ok(summary);
    }

    let summary = column_means(table)?;
    log::info!("No '{}' row found; averaged {} trial rows", config.average_label, table.len());
    Ok(summary)
}

/// Arithmetic mean of each duration column over all rows
pub fn column_means(table: &ResultsTable) -> Result<SummaryRow> {
    if table.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let mean = |column: Column| -> Result<f64> {
        let values = table.values(column)?;
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    };

    Ok(SummaryRow {
        predictable_ns: mean(Column::Predictable)?,
        unpredictable_ns: mean(Column::Unpredictable)?,
        difference_ns: mean(Column::Difference)?,
        source: AverageSource::Computed,
    })
}

/// Find rows whose difference disagrees with `Unpredictable - Predictable`
///
/// Returns the row indices that deviate by more than `tolerance_ns`.
/// Rows with non-numeric cells are skipped.
pub fn check_differences(table: &ResultsTable, tolerance_ns: f64) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let p = row.cell(Column::Predictable).parse()?;
            let u = row.cell(Column::Unpredictable).parse()?;
            let d = row.cell(Column::Difference).parse()?;
            ((u - p - d).abs() > tolerance_ns).then_some(i)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrialRow;

    fn trial_rows() -> Vec<TrialRow> {
        vec![
            TrialRow::new("1", "5.0", "10.0", "5.0"),
            TrialRow::new("2", "7.0", "9.0", "2.0"),
        ]
    }

    #[test]
    fn test_precomputed_average_row() {
        let mut rows = trial_rows();
        rows.push(TrialRow::new("Average", "6.0", "9.5", "3.5"));
        let mut table = ResultsTable::from_rows(rows);

        let summary = extract_average(&mut table, &ReportConfig::new()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.labels(), vec!["1", "2"]);
        assert_eq!(summary.source, AverageSource::Precomputed);
        assert_eq!(summary.predictable_ns, 6.0);
        assert_eq!(summary.unpredictable_ns, 9.5);
        assert_eq!(summary.difference_ns, 3.5);
    }

    #[test]
    fn test_precomputed_values_used_verbatim() {
        // The benchmark truncates its averages; they must not be recomputed
        let mut rows = trial_rows();
        rows.push(TrialRow::new("Average", "100", "200", "100"));
        let mut table = ResultsTable::from_rows(rows);

        let summary = extract_average(&mut table, &ReportConfig::new()).unwrap();

        assert_eq!(summary.predictable_ns, 100.0);
        assert_eq!(summary.unpredictable_ns, 200.0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_computed_average() {
        let mut table = ResultsTable::from_rows(trial_rows());

        let summary = extract_average(&mut table, &ReportConfig::new()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(summary.source, AverageSource::Computed);
        assert!((summary.predictable_ns - 6.0).abs() < 1e-9);
        assert!((summary.unpredictable_ns - 9.5).abs() < 1e-9);
        assert!((summary.difference_ns - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_computed_mean_matches_arithmetic_mean() {
        let values = [1.1, 2.7, 1e6, 0.0003, 42.0, 17.25];
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, &v)| TrialRow::new((i + 1).to_string(), v, v * 2.0, v))
            .collect();
        let mut table = ResultsTable::from_rows(rows);

        let summary = extract_average(&mut table, &ReportConfig::new()).unwrap();

        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert!((summary.predictable_ns - expected).abs() < 1e-9);
        assert!((summary.unpredictable_ns - expected * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentinel_only_checked_on_last_row() {
        let mut table = ResultsTable::from_rows(vec![
            TrialRow::new("Average", "1", "1", "0"),
            TrialRow::new("2", "3", "5", "2"),
        ]);

        let summary = extract_average(&mut table, &ReportConfig::new()).unwrap();

        assert_eq!(summary.source, AverageSource::Computed);
        assert_eq!(table.len(), 2);
        assert_eq!(summary.predictable_ns, 2.0);
    }

    #[test]
    fn test_custom_sentinel() {
        let mut rows = trial_rows();
        rows.push(TrialRow::new("Mean", "6", "9.5", "3.5"));
        let mut table = ResultsTable::from_rows(rows);
        let config = ReportConfig::new().with_average_label("Mean");

        let summary = extract_average(&mut table, &config).unwrap();
        assert_eq!(summary.source, AverageSource::Precomputed);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let mut table = ResultsTable::new();
        let err = extract_average(&mut table, &ReportConfig::new()).unwrap_err();
        assert!(matches!(err, ReportError::EmptyInput));
    }

    #[test]
    fn test_average_row_only_leaves_empty_table() {
        let mut table = ResultsTable::from_rows(vec![TrialRow::new("Average", "6", "9", "3")]);

        let summary = extract_average(&mut table, &ReportConfig::new()).unwrap();
        assert_eq!(summary.predictable_ns, 6.0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_non_numeric_average_row() {
        let mut rows = trial_rows();
        rows.push(TrialRow::new("Average", "6", "N/A", "3"));
        let mut table = ResultsTable::from_rows(rows);

        match extract_average(&mut table, &ReportConfig::new()) {
            Err(ReportError::Parse { row, column, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, Column::Unpredictable);
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_differences() {
        let table = ResultsTable::from_rows(vec![
            TrialRow::new("1", 5.0, 10.0, 5.0),
            TrialRow::new("2", 7.0, 9.0, 4.0),
            TrialRow::new("3", 7.0, 9.0, 2.3),
            TrialRow::new("4", "N/A", 9.0, 2.0),
        ]);

        assert_eq!(check_differences(&table, 0.5), vec![1]);
        assert_eq!(check_differences(&table, 0.1), vec![1, 2]);
    }
}
