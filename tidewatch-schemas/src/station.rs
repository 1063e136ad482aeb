use serde::{Deserialize, Serialize};

/// Operational status of an observation platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Active,
    Maintenance,
    Offline,
}

impl Default for StationStatus {
    fn default() -> Self {
        StationStatus::Active
    }
}

/// One observation station in the catalog.
///
/// The pipeline only consumes `id` (it keys the deterministic signal seed);
/// the remaining fields describe the platform for catalog display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    /// Platform kind, e.g. "Buoy", "Tide Gauge", "Weather Station".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Human-readable placement, e.g. "North Pacific, 35.6N 150.1W".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: StationStatus,
}

impl Station {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind: None,
            location: None,
            status: StationStatus::default(),
        }
    }
}
