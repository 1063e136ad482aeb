use crate::metric::MetricKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped set of the four simulated metric values.
///
/// Immutable once produced; windows keep readings in ascending timestamp
/// order. Field order matters: it is the authoritative export column order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(with = "iso8601")]
    pub ts: DateTime<Utc>,
    pub sst: f64,
    pub wave: f64,
    pub wind: f64,
    pub tide: f64,
}

impl Reading {
    /// Value of the given metric, via exhaustive match.
    pub fn value(&self, key: MetricKey) -> f64 {
        match key {
            MetricKey::Sst => self.sst,
            MetricKey::Wave => self.wave,
            MetricKey::Wind => self.wind,
            MetricKey::Tide => self.tide,
        }
    }

    /// True when every metric value is a finite number.
    pub fn is_finite(&self) -> bool {
        MetricKey::ALL.iter().all(|k| self.value(*k).is_finite())
    }
}

/// Serde adapter serializing timestamps as millisecond-precision ISO-8601
/// UTC strings (`2026-08-30T12:00:00.000Z`), the shape downstream export
/// consumers expect.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
