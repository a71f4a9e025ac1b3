//! Core types for the branch prediction report library
//!
//! This module defines the in-memory results table loaded from a benchmark CSV,
//! the summary row derived from it, and the error taxonomy shared by every
//! pipeline step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Header of the trial identifier column
pub const TRIAL_HEADER: &str = "Trial";

/// Default sentinel marking a pre-computed summary row
pub const DEFAULT_AVERAGE_LABEL: &str = "Average";

/// The three duration columns of a results file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Timing of the loop with an alternating branch
    Predictable,
    /// Timing of the loop with a random branch
    Unpredictable,
    /// Unpredictable minus Predictable
    Difference,
}

impl Column {
    /// All duration columns, in file order
    pub const ALL: [Column; 3] = [Column::Predictable, Column::Unpredictable, Column::Difference];

    /// Header text after whitespace normalization
    pub fn header(&self) -> &'static str {
        match self {
            Column::Predictable => "Predictable (ns)",
            Column::Unpredictable => "Unpredictable (ns)",
            Column::Difference => "Difference (ns)",
        }
    }

    /// Header text exactly as the benchmark tool writes it (leading space)
    pub fn raw_header(&self) -> &'static str {
        match self {
            Column::Predictable => " Predictable (ns)",
            Column::Unpredictable => " Unpredictable (ns)",
            Column::Difference => " Difference (ns)",
        }
    }

    fn index(self) -> usize {
        match self {
            Column::Predictable => 0,
            Column::Unpredictable => 1,
            Column::Difference => 2,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// A value in one of the duration columns
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text as read from the file, not yet coerced
    Text(String),
    /// Coerced floating-point value
    Number(f64),
}

impl Cell {
    /// Parse the cell as a float without modifying it
    pub fn parse(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// The numeric value, only if the cell has already been coerced
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// Check if the cell holds a coerced number
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Number(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(v) => write!(f, "{}", v),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// One row of the results file
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRow {
    /// Trial identifier ("1", "2", ... or the average sentinel)
    pub trial: String,
    /// Duration cells, indexed by `Column`
    cells: [Cell; 3],
    /// Values of non-standard columns, in file order
    pub extra: Vec<String>,
}

impl TrialRow {
    /// Create a row from its trial label and the three duration cells
    pub fn new(
        trial: impl Into<String>,
        predictable: impl Into<Cell>,
        unpredictable: impl Into<Cell>,
        difference: impl Into<Cell>,
    ) -> Self {
        Self {
            trial: trial.into(),
            cells: [predictable.into(), unpredictable.into(), difference.into()],
            extra: Vec::new(),
        }
    }

    /// Builder method: attach values for extra columns
    pub fn with_extra(mut self, extra: Vec<String>) -> Self {
        self.extra = extra;
        self
    }

    pub fn cell(&self, column: Column) -> &Cell {
        &self.cells[column.index()]
    }

    pub fn cell_mut(&mut self, column: Column) -> &mut Cell {
        &mut self.cells[column.index()]
    }

    /// Parse a duration cell, reporting `row` as its position on failure
    pub fn parse_value(&self, row: usize, column: Column) -> Result<f64> {
        let cell = self.cell(column);
        cell.parse().ok_or_else(|| ReportError::Parse {
            row,
            column,
            value: cell.to_string(),
        })
    }
}

/// Benchmark results held in memory, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    /// Names of columns beyond `Trial` and the three durations
    pub extra_columns: Vec<String>,
    /// Data rows
    pub rows: Vec<TrialRow>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows with no extra columns
    pub fn from_rows(rows: Vec<TrialRow>) -> Self {
        Self {
            extra_columns: Vec::new(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trial labels in table order
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.trial.clone()).collect()
    }

    /// All values of a duration column, parsing text cells on the fly
    pub fn values(&self, column: Column) -> Result<Vec<f64>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.parse_value(i, column))
            .collect()
    }

    /// Check if every duration cell has been coerced
    pub fn is_numeric(&self) -> bool {
        self.rows
            .iter()
            .all(|row| Column::ALL.iter().all(|&c| row.cell(c).is_numeric()))
    }
}

/// Where the summary values came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AverageSource {
    /// Taken verbatim from a trailing average row
    Precomputed,
    /// Arithmetic mean over all trial rows
    Computed,
}

impl fmt::Display for AverageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageSource::Precomputed => write!(f, "precomputed"),
            AverageSource::Computed => write!(f, "computed"),
        }
    }
}

/// Average timings for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub predictable_ns: f64,
    pub unpredictable_ns: f64,
    pub difference_ns: f64,
    pub source: AverageSource,
}

impl SummaryRow {
    /// Get the average of one duration column
    pub fn get(&self, column: Column) -> f64 {
        match column {
            Column::Predictable => self.predictable_ns,
            Column::Unpredictable => self.unpredictable_ns,
            Column::Difference => self.difference_ns,
        }
    }
}

/// Errors that can occur while preparing a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Input file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Malformed results file: {0}")]
    Format(String),

    #[error("Results file contains no data rows")]
    EmptyInput,

    #[error("Non-numeric value {:?} at data row {} (index {}), column '{}'", .value, .row + 1, .row, .column)]
    Parse {
        row: usize,
        column: Column,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Name of the failure kind, as reported on exit
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::NotFound(_) => "NotFoundError",
            ReportError::Format(_) => "FormatError",
            ReportError::EmptyInput => "EmptyInputError",
            ReportError::Parse { .. } => "ParseError",
            ReportError::Io(_) => "IoError",
        }
    }
}
