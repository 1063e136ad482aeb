use crate::{station::Station, thresholds::ThresholdOverrides};
use serde::Deserialize;

/// Top-level wrapper for a dashboard configuration file.
#[derive(Debug, Deserialize)]
pub struct DashboardConfigFile {
    pub schema_version: String,
    pub dashboard: DashboardConfig,
}

/// Configuration surface consumed by the telemetry pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub initial_station_id: Option<String>,
    #[serde(default = "default_comparison_enabled")]
    pub comparison_enabled: bool,
    #[serde(default)]
    pub thresholds: ThresholdOverrides,
    #[serde(default = "default_polling_interval_ms")]
    pub polling_interval_ms: u64,
}

fn default_comparison_enabled() -> bool {
    true
}

fn default_polling_interval_ms() -> u64 {
    3000
}
