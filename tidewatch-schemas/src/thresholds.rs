use crate::metric::MetricKey;
use serde::{Deserialize, Serialize};

/// Per-metric alert limits.
///
/// Every metric is compared directly against its limit except tide, which
/// alerts on absolute value (a high or low excursion from datum is equally
/// noteworthy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub sst: f64,
    pub wave: f64,
    pub wind: f64,
    pub tide: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            sst: 28.0,
            wave: 2.5,
            wind: 12.0,
            tide: 1.5,
        }
    }
}

impl Thresholds {
    /// Defaults with any provided overrides applied on top.
    pub fn with_overrides(overrides: &ThresholdOverrides) -> Self {
        let defaults = Self::default();
        Self {
            sst: overrides.sst.unwrap_or(defaults.sst),
            wave: overrides.wave.unwrap_or(defaults.wave),
            wind: overrides.wind.unwrap_or(defaults.wind),
            tide: overrides.tide.unwrap_or(defaults.tide),
        }
    }

    pub fn limit(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Sst => self.sst,
            MetricKey::Wave => self.wave,
            MetricKey::Wind => self.wind,
            MetricKey::Tide => self.tide,
        }
    }

    /// Whether `value` breaches the limit for `key`. Tide compares on
    /// absolute value; everything else compares directly.
    pub fn exceeded(&self, key: MetricKey, value: f64) -> bool {
        match key {
            MetricKey::Tide => value.abs() > self.tide,
            _ => value > self.limit(key),
        }
    }
}

/// Partial threshold map for configuration files; unset metrics keep their
/// defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sst: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tide: Option<f64>,
}
