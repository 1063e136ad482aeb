//! Derived per-metric state computed from a window's tail.

use crate::telemetry::window::Window;
use serde::Serialize;
use tidewatch_schemas::{metric::MetricKey, thresholds::Thresholds};

/// Current value, trend and alert flag for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricState {
    /// Last reading's value, or `None` when the window is empty.
    pub current: Option<f64>,
    /// Signed delta against the previous reading, or `None` with fewer
    /// than two points.
    pub trend: Option<f64>,
    /// Whether the current value breaches the configured threshold.
    pub alert_active: bool,
}

/// Derived state for all four tracked metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedState {
    pub sst: MetricState,
    pub wave: MetricState,
    pub wind: MetricState,
    pub tide: MetricState,
}

impl DerivedState {
    pub fn get(&self, key: MetricKey) -> &MetricState {
        match key {
            MetricKey::Sst => &self.sst,
            MetricKey::Wave => &self.wave,
            MetricKey::Wind => &self.wind,
            MetricKey::Tide => &self.tide,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &MetricState)> {
        MetricKey::ALL.iter().map(move |k| (*k, self.get(*k)))
    }

    /// True when any metric's alert is active.
    pub fn any_alert(&self) -> bool {
        MetricKey::ALL.iter().any(|k| self.get(*k).alert_active)
    }
}

/// Reduces the window's last two readings to per-metric state.
///
/// Pure and idempotent: recomputing on the same window yields identical
/// output.
pub fn compute(window: &Window, thresholds: &Thresholds) -> DerivedState {
    let current = window.last();
    let previous = window.second_to_last();

    let metric = |key: MetricKey| -> MetricState {
        let value = current.map(|r| r.value(key));
        MetricState {
            current: value,
            trend: match (current, previous) {
                (Some(c), Some(p)) => Some(c.value(key) - p.value(key)),
                _ => None,
            },
            alert_active: value.map_or(false, |v| thresholds.exceeded(key, v)),
        }
    };

    DerivedState {
        sst: metric(MetricKey::Sst),
        wave: metric(MetricKey::Wave),
        wind: metric(MetricKey::Wind),
        tide: metric(MetricKey::Tide),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::window::Window;
    use chrono::{TimeZone, Utc};
    use tidewatch_schemas::{range::TimeRange, reading::Reading};

    fn window() -> Window {
        Window::reseed(
            TimeRange::OneHour,
            "STN-001",
            Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
        )
    }

    fn fixed_window(readings: Vec<Reading>) -> Window {
        Window::from_readings(TimeRange::OneHour, "STN-001", readings)
    }

    fn reading(ts_minute: u32, wave: f64) -> Reading {
        Reading {
            ts: Utc.with_ymd_and_hms(2026, 8, 30, 12, ts_minute, 0).unwrap(),
            sst: 22.0,
            wave,
            wind: 6.0,
            tide: 0.8,
        }
    }

    #[test]
    fn trend_is_last_minus_second_to_last() {
        let w = window();
        let state = compute(&w, &Thresholds::default());
        let last = w.last().unwrap();
        let prev = w.second_to_last().unwrap();
        for key in MetricKey::ALL {
            let m = state.get(key);
            assert_eq!(m.current, Some(last.value(key)));
            assert_eq!(m.trend, Some(last.value(key) - prev.value(key)));
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let w = window();
        let thresholds = Thresholds::default();
        assert_eq!(compute(&w, &thresholds), compute(&w, &thresholds));
    }

    #[test]
    fn trend_absent_with_fewer_than_two_points() {
        let empty = fixed_window(vec![]);
        let state = compute(&empty, &Thresholds::default());
        for key in MetricKey::ALL {
            assert_eq!(state.get(key).current, None);
            assert_eq!(state.get(key).trend, None);
            assert!(!state.get(key).alert_active);
        }

        let single = fixed_window(vec![reading(0, 1.2)]);
        let state = compute(&single, &Thresholds::default());
        assert_eq!(state.wave.current, Some(1.2));
        assert_eq!(state.wave.trend, None);
    }

    #[test]
    fn wave_alert_follows_threshold() {
        let thresholds = Thresholds {
            wave: 2.5,
            ..Thresholds::default()
        };

        let breaching = fixed_window(vec![reading(0, 1.8), reading(1, 3.1)]);
        let state = compute(&breaching, &thresholds);
        assert!(state.wave.alert_active);
        assert!(state.any_alert());
        assert!((state.wave.trend.unwrap() - 1.3).abs() < 1e-9);

        let calm = fixed_window(vec![reading(0, 1.8), reading(1, 1.0)]);
        let state = compute(&calm, &thresholds);
        assert!(!state.wave.alert_active);
        assert!(!state.any_alert());
    }

    #[test]
    fn tide_alert_uses_absolute_value() {
        let thresholds = Thresholds {
            tide: 1.5,
            ..Thresholds::default()
        };
        assert!(thresholds.exceeded(MetricKey::Tide, -1.6));
        assert!(thresholds.exceeded(MetricKey::Tide, 1.6));
        assert!(!thresholds.exceeded(MetricKey::Tide, -1.4));
        // Direct comparison elsewhere: a deeply negative value is no alert.
        assert!(!thresholds.exceeded(MetricKey::Sst, -100.0));
    }
}
