use crate::plotting;
use anyhow::{bail, Context, Result};
use std::{fs, path::Path, thread, time::Duration};
use tidewatch_core::{
    export::{self, ExportFormat},
    telemetry::{
        builder::FeedBuilder,
        feed::{TelemetryFeed, TickOutcome},
    },
};
use tidewatch_schemas::{file_formats::DashboardConfig, metric::MetricKey, range::TimeRange};

/// Per-run options resolved from the command line.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub station_id: Option<String>,
    pub compare_id: Option<String>,
    pub range: TimeRange,
    pub ticks: u64,
    pub live: bool,
}

/// Runs one end-to-end session: seed, live ticks, exports, charts, report.
pub fn run_session(
    config: &DashboardConfig,
    opts: &SessionOptions,
    output_dir: &Path,
) -> Result<()> {
    let mut feed = build_feed(config, opts.station_id.as_deref(), opts.range)?;
    let mut compare = match &opts.compare_id {
        Some(id) => {
            if !config.comparison_enabled {
                bail!("Comparison is disabled in the dashboard configuration");
            }
            if id == &feed.selection().station_id {
                bail!("Comparison station must differ from the primary station");
            }
            Some(build_feed(config, Some(id), opts.range)?)
        }
        None => None,
    };

    println!(
        "--- [Session] {} ({}) seeded with {} points ---",
        feed.station_name(),
        feed.selection().range,
        feed.window().len()
    );
    if let Some(c) = &compare {
        println!("--- [Session] Comparing against {} ---", c.station_name());
    }

    if !opts.live {
        feed.set_live(false);
        if let Some(c) = compare.as_mut() {
            c.set_live(false);
        }
    }
    println!("Status: {}", feed.status().label());

    run_live_ticks(&mut feed, compare.as_mut(), opts.ticks);

    write_exports(&feed, output_dir)?;
    plotting::plot_metric_charts(output_dir, feed.window(), compare.as_ref().map(|c| c.window()))?;
    write_derived_state(&feed, output_dir)?;
    print_summary_report(&feed);

    Ok(())
}

fn build_feed(
    config: &DashboardConfig,
    station_id: Option<&str>,
    range: TimeRange,
) -> Result<TelemetryFeed> {
    let mut builder = FeedBuilder::new()
        .with_stations(config.stations.clone())
        .with_range(range)
        .with_threshold_overrides(config.thresholds)
        .with_poll_interval(Duration::from_millis(config.polling_interval_ms));

    // CLI selection wins over the configured initial station.
    if let Some(id) = station_id.or(config.initial_station_id.as_deref()) {
        builder = builder.with_station(id);
    }

    builder.build().context("Failed to construct telemetry feed")
}

/// Sleeps the poll interval between ticks, scheduling each against the
/// generation current at schedule time.
fn run_live_ticks(feed: &mut TelemetryFeed, mut compare: Option<&mut TelemetryFeed>, ticks: u64) {
    if !feed.is_live() || ticks == 0 {
        return;
    }
    println!("--- [Session] Running {} live ticks ---", ticks);
    for i in 1..=ticks {
        let scheduled = feed.generation();
        thread::sleep(feed.poll_interval());
        match feed.tick(scheduled) {
            TickOutcome::Appended => {
                let newest = feed.window().last().map(|r| r.ts);
                println!(
                    "tick {}/{}: appended point at {}",
                    i,
                    ticks,
                    newest.map_or_else(|| "-".to_string(), |ts| ts.to_rfc3339())
                );
            }
            TickOutcome::Suspended => println!("tick {}/{}: paused, skipped", i, ticks),
            TickOutcome::Stale => println!("tick {}/{}: stale, discarded", i, ticks),
        }
        if let Some(c) = compare.as_mut() {
            let scheduled = c.generation();
            c.tick(scheduled);
        }
    }
}

fn write_exports(feed: &TelemetryFeed, output_dir: &Path) -> Result<()> {
    let station_id = &feed.selection().station_id;
    let range = feed.selection().range;

    let csv = export::to_csv(feed.window())?;
    let csv_name = export::export_filename(station_id, range, ExportFormat::Csv);
    fs::write(output_dir.join(&csv_name), csv)
        .with_context(|| format!("Failed to write {}", csv_name))?;

    let json = export::to_json(feed.window())?;
    let json_name = export::export_filename(station_id, range, ExportFormat::Json);
    fs::write(output_dir.join(&json_name), json)
        .with_context(|| format!("Failed to write {}", json_name))?;

    println!(
        "--- [Session] Exports written: {}, {} ---",
        csv_name, json_name
    );
    Ok(())
}

fn write_derived_state(feed: &TelemetryFeed, output_dir: &Path) -> Result<()> {
    let derived = feed.derived();
    let json = serde_json::to_string_pretty(&derived)?;
    fs::write(output_dir.join("derived_state.json"), json)
        .context("Failed to write derived_state.json")?;
    Ok(())
}

/// Console rendition of the dashboard's metric cards.
fn print_summary_report(feed: &TelemetryFeed) {
    let derived = feed.derived();
    let thresholds = feed.thresholds();

    println!("\n--- [Current Conditions: {}] ---", feed.station_name());
    println!("========================================");
    for (key, state) in derived.iter() {
        let decimals = key.decimals() as usize;
        let current = state
            .current
            .map_or_else(|| "-".to_string(), |v| format!("{:.*}", decimals, v));
        let trend = state
            .trend
            .map_or_else(|| "-".to_string(), |t| format!("{:+.*}", decimals, t));
        let status = if state.alert_active { "ALERT" } else { "Normal" };
        println!(
            "  - {:<18} {:>8} {:<4} | trend {:>7} | limit {:>5} | {}",
            key.label(),
            current,
            key.unit(),
            trend,
            thresholds.limit(key),
            status
        );
    }
    println!("========================================");
    if derived.any_alert() {
        println!("One or more metrics exceed their configured thresholds.");
    }
}
