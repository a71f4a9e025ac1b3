//! Chart rendering
//!
//! Draws the two report charts as PNG files. Trials sit on a categorical
//! x-axis at positions 0..n in table order, labelled with their trial names.

use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Figure size of the line chart, in inches (width, height)
pub const LINE_FIGURE: (f64, f64) = (10.0, 5.0);
/// Figure size of the bar chart, in inches (width, height)
pub const BAR_FIGURE: (f64, f64) = (10.0, 4.0);

const PREDICTABLE_COLOR: RGBColor = RGBColor(31, 119, 180);
const UNPREDICTABLE_COLOR: RGBColor = RGBColor(255, 127, 14);
const BAR_COLOR: RGBColor = RGBColor(255, 165, 0);

const MAX_X_LABELS: usize = 20;
const MARKER_SIZE: u32 = 4;

/// Pixel dimensions of a figure at `dpi`
pub fn figure_pixels(figure: (f64, f64), dpi: u32) -> (u32, u32) {
    let (w, h) = figure;
    (
        (w * dpi as f64).round() as u32,
        (h * dpi as f64).round() as u32,
    )
}

fn render_error<E: std::fmt::Display>(path: &Path, e: E) -> anyhow::Error {
    anyhow!("RenderError: failed to draw {:?}: {}", path, e)
}

/// X range holding `count` categories centred on integer positions
fn category_range(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

/// Y range covering `values` with a 5% margin
fn value_range(values: &[f64], include_zero: bool) -> Range<f64> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (mut lo, mut hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if lo > hi {
        return 0.0..1.0;
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { lo.abs().max(1.0) * 0.05 };
    (lo - pad)..(hi + pad)
}

/// Trial name for an x-axis tick, empty between categories
fn trial_label(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Line chart of predictable vs. unpredictable timings, one marker per trial
pub fn render_line_chart(
    path: &Path,
    labels: &[String],
    predictable: &[f64],
    unpredictable: &[f64],
    dpi: u32,
) -> Result<()> {
    log::info!("Rendering line chart: {:?}", path);

    let root = BitMapBackend::new(path, figure_pixels(LINE_FIGURE, dpi)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let all_values: Vec<f64> = predictable.iter().chain(unpredictable).copied().collect();

    let mut chart = ChartBuilder::on(&root)
        .caption("Loop Execution Time per Trial", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(category_range(labels.len()), value_range(&all_values, false))
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .x_labels(labels.len().clamp(1, MAX_X_LABELS))
        .x_label_formatter(&|x: &f64| trial_label(labels, *x))
        .x_desc("Trial")
        .y_desc("Time (nanoseconds)")
        .draw()
        .map_err(|e| render_error(path, e))?;

    let series = [
        ("Predictable Loop", predictable, PREDICTABLE_COLOR),
        ("Unpredictable Loop", unpredictable, UNPREDICTABLE_COLOR),
    ];

    for (name, values, color) in series {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(|e| render_error(path, e))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, MARKER_SIZE, color.filled())))
            .map_err(|e| render_error(path, e))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

/// Bar chart of the per-trial difference
pub fn render_bar_chart(path: &Path, labels: &[String], differences: &[f64], dpi: u32) -> Result<()> {
    log::info!("Rendering bar chart: {:?}", path);

    let root = BitMapBackend::new(path, figure_pixels(BAR_FIGURE, dpi)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Execution Time Difference per Trial", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(category_range(labels.len()), value_range(differences, true))
        .map_err(|e| render_error(path, e))?;

    // Horizontal grid lines only
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().clamp(1, MAX_X_LABELS))
        .x_label_formatter(&|x: &f64| trial_label(labels, *x))
        .x_desc("Trial")
        .y_desc("Difference (ns)")
        .draw()
        .map_err(|e| render_error(path, e))?;

    chart
        .draw_series(differences.iter().enumerate().map(|(i, &v)| {
            let x = i as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, v)], BAR_COLOR.filled())
        }))
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}
