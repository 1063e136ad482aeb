//! Deterministic pseudo-periodic signal generation.
//!
//! Every reading is a pure function of (station seed, phase): a baseline
//! constant per metric, a sinusoid of metric-specific period, and a small
//! composite-sine noise term. Values are smooth, bounded, and reproduce
//! exactly for a fixed station id.

use chrono::{DateTime, Utc};
use tidewatch_schemas::reading::Reading;

/// Phase advance per generated point.
pub const PHASE_STEP: f64 = 0.15;

/// Deterministic seed phase for a station, folded into [0, 1000).
///
/// FNV-1a over the id bytes; replaces the original dashboard's per-mount
/// random seed so that a station always reproduces the same series.
pub fn station_seed(station_id: &str) -> f64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in station_id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash % 1_000_000) as f64 / 1000.0
}

/// Produces the reading at a given phase and timestamp.
///
/// Wave and wind are clamped to zero; wave height and wind speed cannot go
/// negative, while sea temperature and tide (relative to datum) can.
pub fn reading_at(phase: f64, ts: DateTime<Utc>) -> Reading {
    let t = phase;
    let sst = 22.0 + 3.0 * (t / 10.0).sin() + noise(t, 0.6);
    let wave = 1.2 + 0.8 * (t / 8.0).sin().abs() + noise(t + 20.0, 0.3).max(0.0);
    let wind = 6.0 + 4.0 * (t / 6.0).sin().abs() + noise(t + 40.0, 0.8);
    let tide = 0.8 + 0.6 * (t / 20.0).sin() + noise(t + 60.0, 0.2);

    Reading {
        ts,
        sst: round_to(sst, 1),
        wave: round_to(wave.max(0.0), 2),
        wind: round_to(wind.max(0.0), 1),
        tide: round_to(tide, 2),
    }
}

/// Smooth low-amplitude noise: three sine harmonics scaled down.
fn noise(t: f64, scale: f64) -> f64 {
    (t.sin() + (t / 2.0).sin() * 0.5 + (t / 4.0).sin() * 0.25) * 0.1 * scale
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
