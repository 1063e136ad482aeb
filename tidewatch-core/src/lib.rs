//! Simulated marine telemetry pipeline.
//!
//! Data flows in one direction: the signal generator seeds a bounded
//! [`telemetry::window::Window`] for a (station, range) selection, the
//! [`telemetry::feed::TelemetryFeed`] appends one reading per poll tick
//! while live mode is on, [`derived::compute`] reduces the window tail to
//! per-metric current/trend/alert state, and [`export`] serializes the
//! whole window to CSV or JSON on demand. Everything is synchronous and
//! deterministic for a fixed station id.

pub mod derived;
pub mod error;
pub mod export;
pub mod signal;
pub mod telemetry;
