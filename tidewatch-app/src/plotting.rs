//! Sparkline-style PNG charts rendered from a telemetry window.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;
use tidewatch_core::telemetry::window::Window;
use tidewatch_schemas::metric::MetricKey;

const METRIC_COLORS: [RGBColor; 4] = [RED, BLUE, GREEN, MAGENTA];

/// Renders one line chart per metric into `output_dir`, overlaying the
/// comparison window dashed when present.
pub fn plot_metric_charts(
    output_dir: &Path,
    window: &Window,
    compare: Option<&Window>,
) -> Result<()> {
    println!("[Plotting] Generating metric charts...");

    if window.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    for (i, key) in MetricKey::ALL.iter().enumerate() {
        plot_metric(output_dir, i + 1, *key, METRIC_COLORS[i], window, compare)?;
    }

    println!("[Plotting] Charts saved to '{}'.", output_dir.display());
    Ok(())
}

fn plot_metric(
    output_dir: &Path,
    index: usize,
    key: MetricKey,
    color: RGBColor,
    window: &Window,
    compare: Option<&Window>,
) -> Result<()> {
    let path = output_dir.join(format!("{}_{}.png", index, key.as_str()));
    let root = BitMapBackend::new(&path, (1024, 384)).into_drawing_area();
    root.fill(&WHITE)?;

    let series: Vec<f64> = window.iter().map(|r| r.value(key)).collect();
    let compare_series: Vec<f64> = compare
        .map(|w| w.iter().map(|r| r.value(key)).collect())
        .unwrap_or_default();

    let (y_min, y_max) = extent(series.iter().chain(&compare_series));
    let x_max = series.len().max(compare_series.len()) as u64;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} ({})", key.label(), key.unit()),
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0u64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Point (1-min spacing)")
        .y_desc(key.unit())
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series.iter().enumerate().map(|(i, v)| (i as u64, *v)),
            color.stroke_width(2),
        ))?
        .label(window.station_id().to_string())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));

    if let Some(compare_window) = compare {
        let compare_color = RGBColor(110, 110, 110);
        chart
            .draw_series(DashedLineSeries::new(
                compare_series.iter().enumerate().map(|(i, v)| (i as u64, *v)),
                4,
                3,
                compare_color.stroke_width(2),
            ))?
            .label(compare_window.station_id().to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], compare_color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Value extent with a guard for flat series, padded 10% on both ends.
fn extent<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.1;
    (min - pad, max + pad)
}
