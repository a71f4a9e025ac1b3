//! Branch Prediction Report Library
//!
//! Loads the results file written by the branch prediction benchmark and turns
//! it into a cleaned table of trials plus the run averages.
//!
//! # Architecture
//!
//! This library covers the data side of the report:
//! - Reads the benchmark CSV (leading-space headers are normalized)
//! - Picks up the trailing `Average` row, or computes column means
//! - Coerces the duration columns to numbers
//! - Formats the averages and writes tables back in the benchmark's layout
//!
//! The library does NOT:
//! - Render charts
//! - Open images in a viewer
//! - Parse command-line arguments or configuration files
//!
//! Those live in the application layer (branch-report-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use branch_report::{PreparedReport, ReportConfig, SummaryStyle};
//! use branch_report::summary::write_summary;
//! use std::path::Path;
//!
//! let config = ReportConfig::new();
//! let report = PreparedReport::from_path(Path::new("branch_prediction_results.csv"), &config).unwrap();
//!
//! write_summary(&mut std::io::stdout(), &report.summary, SummaryStyle::Plain).unwrap();
//! ```

// Public modules
pub mod coerce;
pub mod config;
pub mod extract;
pub mod loader;
pub mod report;
pub mod summary;
pub mod types;
pub mod writer;

// Re-export main types for convenience
pub use config::ReportConfig;
pub use report::PreparedReport;
pub use summary::SummaryStyle;
pub use types::{
    AverageSource, Cell, Column, ReportError, ResultsTable, Result, SummaryRow, TrialRow,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
