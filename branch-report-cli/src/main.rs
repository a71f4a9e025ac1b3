//! Branch Prediction Report CLI
//!
//! This is the command-line front end for the branch-report library.
//! It loads the benchmark results and adds:
//! - Line and bar charts (PNG)
//! - Best-effort display of the charts
//! - The averages summary on standard output
//! - Optional export of the cleaned table

use anyhow::{Context, Result};
use branch_report::summary::write_summary;
use branch_report::writer::save_results;
use branch_report::{Column, PreparedReport, ReportError, SummaryStyle};
use clap::Parser;
use std::path::PathBuf;

mod charts;
mod config;
mod display;

use config::AppConfig;

/// Branch Report - Chart and summarize branch prediction benchmark results
#[derive(Parser, Debug)]
#[command(name = "branch-report")]
#[command(about = "Chart and summarize branch prediction benchmark results", long_about = None)]
#[command(version)]
struct Args {
    /// Results CSV written by the benchmark [default: branch_prediction_results.csv]
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Directory for the chart images
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Summary format: plain, table or json
    #[arg(long, value_name = "FORMAT")]
    format: Option<SummaryStyle>,

    /// Also write the cleaned table and averages as CSV
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Pixels per figure inch
    #[arg(long, value_name = "DPI", value_parser = clap::value_parser!(u32).range(1..))]
    dpi: Option<u32>,

    /// Do not open the charts in an image viewer
    #[arg(long)]
    no_show: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Branch Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using report library v{}", branch_report::VERSION);

    let config = resolve_config(&args)?;
    run(&config)
}

/// Merge the configuration file (if any) with command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input.path = input.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(export) = &args.export {
        config.output.export = Some(export.clone());
    }
    if let Some(dpi) = args.dpi {
        config.output.dpi = dpi;
    }
    if args.no_show {
        config.output.show = false;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Attach the failure kind to a library error
fn report_failure(e: ReportError) -> anyhow::Error {
    let kind = e.kind();
    anyhow::Error::new(e).context(kind)
}

/// Load, chart, export and print
fn run(config: &AppConfig) -> Result<()> {
    let report_config = config.input.report_config();

    let report = PreparedReport::from_path(&config.input.path, &report_config)
        .map_err(report_failure)?;

    for row in report.inconsistent_rows(&report_config) {
        log::warn!(
            "Trial {}: difference does not match unpredictable - predictable",
            report.table.rows[row].trial
        );
    }

    let output = &config.output;
    std::fs::create_dir_all(&output.dir)
        .with_context(|| format!("IoError: failed to create output directory {:?}", output.dir))?;

    let labels = report.labels();

    let line_chart = output.line_chart_path();
    charts::render_line_chart(
        &line_chart,
        &labels,
        &report.values(Column::Predictable),
        &report.values(Column::Unpredictable),
        output.dpi,
    )?;
    if output.show {
        display::show_image(&line_chart);
    }

    let bar_chart = output.bar_chart_path();
    charts::render_bar_chart(&bar_chart, &labels, &report.values(Column::Difference), output.dpi)?;
    if output.show {
        display::show_image(&bar_chart);
    }

    if let Some(export) = output.export_path() {
        save_results(&export, &report.table, Some(&report.summary), &report_config.average_label)
            .map_err(report_failure)?;
    }

    let stdout = std::io::stdout();
    write_summary(&mut stdout.lock(), &report.summary, output.format).map_err(report_failure)?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
