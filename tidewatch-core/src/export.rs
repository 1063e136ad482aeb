//! Window export encoders.
//!
//! Two pure serializers over a window, plus the matching decoders used by
//! ingest tooling and tests. Neither touches the network or disk; the
//! caller materializes the returned string however it likes.

use crate::{error::TidewatchError, telemetry::window::Window};
use tidewatch_schemas::{metric::MetricKey, range::TimeRange, reading::Reading};

/// Interchange formats a window can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Download filename convention: `ocean-data_{station}_{range}.{ext}`.
pub fn export_filename(station_id: &str, range: TimeRange, format: ExportFormat) -> String {
    format!("ocean-data_{}_{}.{}", station_id, range, format.extension())
}

/// Encodes the window as CSV: header row `ts,sst,wave,wind,tide`, one row
/// per reading in window order, timestamps as ISO-8601 strings.
pub fn to_csv(window: &Window) -> Result<String, TidewatchError> {
    ensure_finite(window)?;

    let mut writer = csv::Writer::from_writer(Vec::new());
    for reading in window.iter() {
        writer.serialize(reading)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TidewatchError::FileIO("csv export buffer".to_string(), e.into_error()))?;
    // csv output of serde-serialized readings is always valid UTF-8.
    Ok(String::from_utf8(bytes)?)
}

/// Decodes CSV produced by [`to_csv`] back into readings.
pub fn from_csv(data: &str) -> Result<Vec<Reading>, TidewatchError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut readings = Vec::new();
    for result in reader.deserialize() {
        let reading: Reading = result?;
        readings.push(reading);
    }
    Ok(readings)
}

/// Encodes the window as a pretty-printed JSON array of reading objects,
/// preserving window order, numbers as numbers and timestamps as ISO-8601
/// strings.
pub fn to_json(window: &Window) -> Result<String, TidewatchError> {
    ensure_finite(window)?;
    let readings = window.to_vec();
    Ok(serde_json::to_string_pretty(&readings)?)
}

/// Decodes JSON produced by [`to_json`] back into readings.
pub fn from_json(data: &str) -> Result<Vec<Reading>, TidewatchError> {
    Ok(serde_json::from_str(data)?)
}

/// Well-formed windows never contain non-finite values; if one does, fail
/// loudly instead of emitting corrupt output.
fn ensure_finite(window: &Window) -> Result<(), TidewatchError> {
    for (index, reading) in window.iter().enumerate() {
        for key in MetricKey::ALL {
            if !reading.value(key).is_finite() {
                return Err(TidewatchError::NonFiniteSample { metric: key, index });
            }
        }
    }
    Ok(())
}
