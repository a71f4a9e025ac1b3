//! Summary rendering
//!
//! Formats the three averages for standard output. `Plain` is the report
//! layout; `Table` reproduces the benchmark tool's own console summary and
//! `Json` is meant for scripts.

use crate::types::{Column, Result, SummaryRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output style for the averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    #[default]
    Plain,
    Table,
    Json,
}

impl std::str::FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(SummaryStyle::Plain),
            "table" => Ok(SummaryStyle::Table),
            "json" => Ok(SummaryStyle::Json),
            other => Err(format!("Unknown summary format: {}", other)),
        }
    }
}

const PLAIN_LABELS: [(&str, Column); 3] = [
    ("Predictable Loop (avg)", Column::Predictable),
    ("Unpredictable Loop (avg)", Column::Unpredictable),
    ("Difference (avg)", Column::Difference),
];

const TABLE_LABELS: [(&str, Column); 3] = [
    ("Predictable Loop (avg ns)", Column::Predictable),
    ("Unpredictable Loop (avg ns)", Column::Unpredictable),
    ("Difference", Column::Difference),
];

/// Render the summary as a string
pub fn format_summary(summary: &SummaryRow, style: SummaryStyle) -> Result<String> {
    let mut out = String::new();

    match style {
        SummaryStyle::Plain => {
            out.push_str("=== Averages ===\n");
            for (label, column) in PLAIN_LABELS {
                out.push_str(&format!("{}: {:.2} ns\n", label, summary.get(column)));
            }
        }
        SummaryStyle::Table => {
            for (label, column) in TABLE_LABELS {
                out.push_str(&format!("| {:<30} | {:.2} |\n", label, summary.get(column)));
            }
        }
        SummaryStyle::Json => {
            let json = serde_json::to_string_pretty(summary)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            out.push_str(&json);
            out.push('\n');
        }
    }

    Ok(out)
}

/// Write the summary to `writer`
pub fn write_summary<W: Write>(writer: &mut W, summary: &SummaryRow, style: SummaryStyle) -> Result<()> {
    let text = format_summary(summary, style)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}
