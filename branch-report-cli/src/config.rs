//! Configuration loading and parsing

use anyhow::{Context, Result};
use branch_report::{ReportConfig, SummaryStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: PathBuf,
    pub average_label: String,
    pub difference_tolerance_ns: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        let report = ReportConfig::default();
        Self {
            path: PathBuf::from("branch_prediction_results.csv"),
            average_label: report.average_label,
            difference_tolerance_ns: report.difference_tolerance_ns,
        }
    }
}

impl InputConfig {
    /// Library settings derived from this section
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig::new()
            .with_average_label(self.average_label.clone())
            .with_difference_tolerance(self.difference_tolerance_ns)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the charts (and a relative export path) are written to
    pub dir: PathBuf,
    pub line_chart: PathBuf,
    pub bar_chart: PathBuf,
    /// Pixels per figure inch
    pub dpi: u32,
    /// Open the charts in the platform image viewer after saving
    pub show: bool,
    pub format: SummaryStyle,
    /// Write the cleaned table plus averages in the benchmark's CSV layout
    pub export: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            line_chart: PathBuf::from("loop_execution_time.png"),
            bar_chart: PathBuf::from("difference_per_trial.png"),
            dpi: 100,
            show: true,
            format: SummaryStyle::Plain,
            export: None,
        }
    }
}

impl OutputConfig {
    pub fn line_chart_path(&self) -> PathBuf {
        self.dir.join(&self.line_chart)
    }

    pub fn bar_chart_path(&self) -> PathBuf {
        self.dir.join(&self.bar_chart)
    }

    pub fn export_path(&self) -> Option<PathBuf> {
        self.export.as_ref().map(|p| self.dir.join(p))
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.output.dpi == 0 {
        anyhow::bail!("Invalid config file {:?}: output.dpi must be positive", path);
    }

    Ok(config)
}
