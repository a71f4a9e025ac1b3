// End-to-end checks of the data pipeline against benchmark-style files
use branch_report::summary::format_summary;
use branch_report::{AverageSource, Column, PreparedReport, ReportConfig, ReportError, SummaryStyle};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "Trial, Predictable (ns), Unpredictable (ns), Difference (ns)\n";

const EXPECTED_SUMMARY: &str = "=== Averages ===\n\
                                Predictable Loop (avg): 6.00 ns\n\
                                Unpredictable Loop (avg): 9.50 ns\n\
                                Difference (avg): 3.50 ns\n";

fn results_file(rows: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(HEADER.as_bytes()).unwrap();
    temp_file.write_all(rows.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_precomputed_average_scenario() {
    let file = results_file("1, 5.0, 10.0, 5.0\n2, 7.0, 9.0, 2.0\nAverage, 6.0, 9.5, 3.5\n");

    let report = PreparedReport::from_path(file.path(), &ReportConfig::new()).unwrap();

    assert_eq!(report.table.len(), 2);
    assert_eq!(report.summary.source, AverageSource::Precomputed);
    assert_eq!(report.values(Column::Unpredictable), vec![10.0, 9.0]);
    assert_eq!(
        format_summary(&report.summary, SummaryStyle::Plain).unwrap(),
        EXPECTED_SUMMARY
    );
}

#[test]
fn test_computed_average_scenario() {
    let file = results_file("1, 5.0, 10.0, 5.0\n2, 7.0, 9.0, 2.0\n");

    let report = PreparedReport::from_path(file.path(), &ReportConfig::new()).unwrap();

    assert_eq!(report.table.len(), 2);
    assert_eq!(report.summary.source, AverageSource::Computed);
    assert_eq!(
        format_summary(&report.summary, SummaryStyle::Plain).unwrap(),
        EXPECTED_SUMMARY
    );
}

#[test]
fn test_header_only_scenario() {
    let file = results_file("");

    let err = PreparedReport::from_path(file.path(), &ReportConfig::new()).unwrap_err();
    assert!(matches!(err, ReportError::EmptyInput));
}

#[test]
fn test_not_available_cell_scenario() {
    let file = results_file("1, 5, 10, 5\n2, 7, N/A, 2\n3, 6, 8, 2\n");

    let err = PreparedReport::from_path(file.path(), &ReportConfig::new()).unwrap_err();

    assert_eq!(err.kind(), "ParseError");
    let message = err.to_string();
    assert!(message.contains("data row 2 (index 1)"), "{}", message);
    assert!(message.contains("Unpredictable (ns)"), "{}", message);
    assert!(message.contains("N/A"), "{}", message);
}

#[test]
fn test_trial_order_preserved() {
    let file = results_file("10, 1, 2, 1\n2, 1, 2, 1\n7, 1, 2, 1\n");

    let report = PreparedReport::from_path(file.path(), &ReportConfig::new()).unwrap();
    assert_eq!(report.labels(), vec!["10", "2", "7"]);
}

#[test]
fn test_inconsistent_difference_detected() {
    let file = results_file("1, 5, 10, 5\n2, 7, 9, 20\n");

    let config = ReportConfig::new();
    let report = PreparedReport::from_path(file.path(), &config).unwrap();
    assert_eq!(report.inconsistent_rows(&config), vec![1]);
}
