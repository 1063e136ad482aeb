use serde::{Deserialize, Serialize};

/// Closed enumeration of the four tracked observation metrics.
///
/// Readings are accessed through exhaustive matches on this key rather than
/// by dynamic field lookup, so adding a metric is a compile-time affair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKey {
    /// Sea surface temperature.
    Sst,
    /// Significant wave height.
    Wave,
    /// Wind speed.
    Wind,
    /// Tide level relative to datum.
    Tide,
}

impl MetricKey {
    /// All metric keys, in display and export column order.
    pub const ALL: [MetricKey; 4] = [
        MetricKey::Sst,
        MetricKey::Wave,
        MetricKey::Wind,
        MetricKey::Tide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Sst => "sst",
            MetricKey::Wave => "wave",
            MetricKey::Wind => "wind",
            MetricKey::Tide => "tide",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::Sst => "Sea Surface Temp",
            MetricKey::Wave => "Wave Height",
            MetricKey::Wind => "Wind Speed",
            MetricKey::Tide => "Tide Level",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricKey::Sst => "\u{b0}C",
            MetricKey::Wave => "m",
            MetricKey::Wind => "m/s",
            MetricKey::Tide => "m",
        }
    }

    /// Decimal places carried by simulated values of this metric.
    pub fn decimals(&self) -> u32 {
        match self {
            MetricKey::Sst | MetricKey::Wind => 1,
            MetricKey::Wave | MetricKey::Tide => 2,
        }
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
