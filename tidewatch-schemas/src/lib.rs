//! Shared data types for the tidewatch telemetry pipeline.
//!
//! Everything here is plain serde-serializable data with no behavior beyond
//! accessors: readings, metric keys, time ranges, stations, alert thresholds
//! and the configuration file wrappers consumed by the application layer.

pub mod file_formats;
pub mod metric;
pub mod range;
pub mod reading;
pub mod station;
pub mod thresholds;
