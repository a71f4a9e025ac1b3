//! Report configuration types
//!
//! This module defines the small set of knobs the library needs to interpret a
//! results file. Output locations, chart sizes and display are handled by the
//! application layer.

use crate::types::DEFAULT_AVERAGE_LABEL;
use serde::{Deserialize, Serialize};

/// Configuration for the report library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Trial label marking a pre-computed summary row
    #[serde(default = "default_average_label")]
    pub average_label: String,

    /// Allowed deviation between `Difference` and `Unpredictable - Predictable`
    #[serde(default = "default_difference_tolerance")]
    pub difference_tolerance_ns: f64,
}

fn default_average_label() -> String {
    DEFAULT_AVERAGE_LABEL.to_string()
}

fn default_difference_tolerance() -> f64 {
    0.5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            average_label: default_average_label(),
            difference_tolerance_ns: default_difference_tolerance(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the average row sentinel
    pub fn with_average_label(mut self, label: impl Into<String>) -> Self {
        self.average_label = label.into();
        self
    }

    /// Builder method: set the difference consistency tolerance
    pub fn with_difference_tolerance(mut self, tolerance_ns: f64) -> Self {
        self.difference_tolerance_ns = tolerance_ns;
        self
    }

    /// Check if a trial label marks the summary row
    pub fn is_average_label(&self, trial: &str) -> bool {
        trial == self.average_label
    }
}
