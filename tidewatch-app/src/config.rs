use anyhow::{Context, Result};
use std::{fs, path::Path};
use tidewatch_core::error::TidewatchError;
use tidewatch_schemas::file_formats::{DashboardConfig, DashboardConfigFile};

/// Loads and validates a dashboard configuration file.
pub fn load(path: &Path) -> Result<DashboardConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let file: DashboardConfigFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse YAML from {:?}", path))?;

    validate(&file.dashboard)?;
    Ok(file.dashboard)
}

fn validate(config: &DashboardConfig) -> Result<()> {
    if config.stations.is_empty() {
        return Err(TidewatchError::NoStationsConfigured.into());
    }
    if let Some(initial) = &config.initial_station_id {
        if !config.stations.iter().any(|s| &s.id == initial) {
            return Err(TidewatchError::StationNotFound(initial.clone()).into());
        }
    }
    if config.polling_interval_ms == 0 {
        return Err(TidewatchError::ConfigError(
            "polling_interval_ms must be greater than zero".to_string(),
        )
        .into());
    }
    Ok(())
}
