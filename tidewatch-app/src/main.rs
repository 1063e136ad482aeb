use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf};
use tidewatch_core::error::TidewatchError;
use tidewatch_schemas::range::TimeRange;

mod config;
mod plotting;
mod workflow;

/// Marine observation telemetry session runner.
#[derive(Debug, Parser)]
#[command(name = "tidewatch", version, about)]
struct Cli {
    /// Path to the dashboard configuration file.
    #[arg(long, default_value = "tidewatch-app/dashboard.yaml")]
    config: PathBuf,

    /// Primary station id; defaults to the configured initial station.
    #[arg(long)]
    station: Option<String>,

    /// Comparison station id to overlay in the charts.
    #[arg(long)]
    compare: Option<String>,

    /// Time range: 1H, 6H, 24H or 7D.
    #[arg(long, default_value = "6H")]
    range: String,

    /// Number of live poll ticks to run before exporting.
    #[arg(long, default_value_t = 5)]
    ticks: u64,

    /// Skip live ticking and export the seeded window as-is.
    #[arg(long)]
    no_live: bool,

    /// Output directory; defaults to a timestamped directory under ./data/runs.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    println!("--- Tidewatch Telemetry ---");

    let cli = Cli::parse();
    let range = parse_range(&cli.range)?;

    let config = config::load(&cli.config)?;

    let station_label = cli
        .station
        .clone()
        .or_else(|| config.initial_station_id.clone())
        .unwrap_or_else(|| config.stations[0].id.clone());
    let output_dir = cli.output_dir.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "./data/runs/{}_{}_{}",
            station_label,
            range,
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ))
    });
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    // Copy the configuration into the run directory for traceability.
    fs::copy(&cli.config, output_dir.join("dashboard.yaml"))
        .with_context(|| format!("Failed to copy config from {:?}", cli.config))?;

    let opts = workflow::SessionOptions {
        station_id: cli.station,
        compare_id: cli.compare,
        range,
        ticks: cli.ticks,
        live: !cli.no_live,
    };
    workflow::run_session(&config, &opts, &output_dir)?;

    println!("\nSession complete. Results are in '{}'", output_dir.display());
    Ok(())
}

/// Maps a `--range` argument onto a [`TimeRange`], rejecting anything
/// outside the four supported codes.
fn parse_range(code: &str) -> Result<TimeRange, TidewatchError> {
    TimeRange::from_code(code).ok_or_else(|| TidewatchError::UnknownRange(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_argument_parses_supported_codes() {
        assert_eq!(parse_range("1H").unwrap(), TimeRange::OneHour);
        assert_eq!(parse_range("7D").unwrap(), TimeRange::Week);
    }

    #[test]
    fn unrecognized_range_argument_is_a_config_error() {
        let err = parse_range("2H").unwrap_err();
        assert!(matches!(err, TidewatchError::UnknownRange(code) if code == "2H"));
        let err = parse_range("").unwrap_err();
        assert!(matches!(err, TidewatchError::UnknownRange(code) if code.is_empty()));
    }
}
