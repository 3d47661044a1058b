use anyhow::{bail, Result};
use plotters::prelude::*;
use std::path::Path;

use super::records::Record;

/// Parses a punctuality value such as "92.3%". The trailing percent sign is
/// optional; anything non-numeric ("NA", empty) yields `None`.
pub fn parse_percent(text: &str) -> Option<f64> {
    text.trim().trim_end_matches('%').parse::<f64>().ok()
}

/// Renders punctuality over record order as an SVG line chart with markers.
///
/// Records whose punctuality does not parse are skipped; the chart fails only
/// when no record yields a numeric value at all.
pub fn render_chart(records: &[Record], title: &str, out_path: &Path) -> Result<()> {
    let points: Vec<(i32, f64)> = records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            parse_percent(&record.punctuality).map(|value| (i as i32, value))
        })
        .collect();
    if points.is_empty() {
        bail!("no numeric punctuality data to plot");
    }

    let min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.1).max(1.0);
    let x_max = records.len().saturating_sub(1).max(1) as i32;

    let root = SVGBackend::new(out_path, (1100, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..x_max, (min - pad)..(max + pad))?;

    chart
        .configure_mesh()
        .x_labels(records.len().min(12))
        .x_label_formatter(&|idx| {
            records
                .get(*idx as usize)
                .map(|record| record.date.clone())
                .unwrap_or_default()
        })
        .x_desc("Time Period")
        .y_desc("Punctuality (%)")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
