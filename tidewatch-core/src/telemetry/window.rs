use crate::signal::{self, PHASE_STEP};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use tidewatch_schemas::{range::TimeRange, reading::Reading};

/// Spacing between consecutive readings.
pub const POINT_SPACING_MS: i64 = 60_000;

/// Bounded, ordered sequence of readings for one (station, range) selection.
///
/// Invariants: `len() <= capacity()`, insertion order equals timestamp
/// order, and eviction always removes the single oldest entry. The window
/// carries the phase cursor of its newest reading so live appends continue
/// the same deterministic sequence.
#[derive(Debug, Clone)]
pub struct Window {
    station_id: String,
    range: TimeRange,
    readings: VecDeque<Reading>,
    phase: f64,
}

impl Window {
    /// Builds a fresh window of `min(capacity(range), 600)` readings,
    /// working backward from `now` at one-minute spacing, returned in
    /// ascending timestamp order. Replaces any prior window for the
    /// selection; synchronous, no I/O.
    pub fn reseed(range: TimeRange, station_id: &str, now: DateTime<Utc>) -> Self {
        let points = range.window_points();
        let mut phase = signal::station_seed(station_id);
        let mut readings = VecDeque::with_capacity(points);

        for i in (0..points).rev() {
            let ts = now - Duration::milliseconds(i as i64 * POINT_SPACING_MS);
            phase += PHASE_STEP;
            readings.push_back(signal::reading_at(phase, ts));
        }

        Self {
            station_id: station_id.to_string(),
            range,
            readings,
            phase,
        }
    }

    /// Appends exactly one reading continuing the tail phase sequence,
    /// evicting the single oldest entry if capacity is now exceeded.
    /// Returns the appended reading.
    pub fn append_next(&mut self, now: DateTime<Utc>) -> Reading {
        let ts = match self.readings.back() {
            Some(last) => last.ts + Duration::milliseconds(POINT_SPACING_MS),
            None => now,
        };
        self.phase += PHASE_STEP;
        let next = signal::reading_at(self.phase, ts);
        self.readings.push_back(next);
        if self.readings.len() > self.capacity() {
            self.readings.pop_front();
        }
        next
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn capacity(&self) -> usize {
        self.range.window_points()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn last(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Second-to-last reading, the baseline for trend computation.
    pub fn second_to_last(&self) -> Option<&Reading> {
        self.readings.len().checked_sub(2).and_then(|i| self.readings.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn to_vec(&self) -> Vec<Reading> {
        self.readings.iter().copied().collect()
    }

    /// Builds a window with fixed contents, bypassing the generator.
    #[cfg(test)]
    pub(crate) fn from_readings(range: TimeRange, station_id: &str, readings: Vec<Reading>) -> Self {
        Self {
            station_id: station_id.to_string(),
            range,
            readings: readings.into(),
            phase: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tidewatch_schemas::range::MAX_WINDOW_POINTS;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn reseed_lengths_match_capped_capacity() {
        for range in TimeRange::ALL {
            let window = Window::reseed(range, "STN-001", now());
            let expected = range.capacity_points().min(MAX_WINDOW_POINTS);
            assert_eq!(window.len(), expected, "range {range}");
        }
    }

    #[test]
    fn reseed_timestamps_ascend_at_fixed_spacing() {
        let window = Window::reseed(TimeRange::SixHours, "STN-001", now());
        let readings = window.to_vec();
        for pair in readings.windows(2) {
            let delta = pair[1].ts - pair[0].ts;
            assert_eq!(delta.num_milliseconds(), POINT_SPACING_MS);
        }
        assert_eq!(readings.last().unwrap().ts, now());
    }

    #[test]
    fn reseed_is_deterministic_per_station() {
        let a = Window::reseed(TimeRange::OneHour, "STN-001", now());
        let b = Window::reseed(TimeRange::OneHour, "STN-001", now());
        let c = Window::reseed(TimeRange::OneHour, "STN-002", now());
        assert_eq!(a.to_vec(), b.to_vec());
        assert_ne!(a.to_vec(), c.to_vec());
    }

    #[test]
    fn append_evicts_exactly_one_once_full() {
        let mut window = Window::reseed(TimeRange::OneHour, "STN-001", now());
        assert_eq!(window.len(), 60);
        let oldest = *window.iter().next().unwrap();

        let appended = window.append_next(now());
        assert_eq!(window.len(), 60);
        assert_ne!(*window.iter().next().unwrap(), oldest);
        assert_eq!(*window.last().unwrap(), appended);
        assert_eq!(
            (appended.ts - now()).num_milliseconds(),
            POINT_SPACING_MS
        );
    }

    #[test]
    fn append_never_exceeds_capacity() {
        let mut window = Window::reseed(TimeRange::OneHour, "STN-001", now());
        for _ in 0..200 {
            window.append_next(now());
            assert!(window.len() <= window.capacity());
            assert_eq!(window.len(), window.capacity());
        }
    }

    #[test]
    fn append_continues_phase_not_reseeds() {
        // The appended reading must equal the one a longer seed sequence
        // would have produced at that phase.
        let mut window = Window::reseed(TimeRange::OneHour, "STN-001", now());
        let before = window.to_vec();
        let appended = window.append_next(now());

        let mut phase = signal::station_seed("STN-001");
        // 60 seeded points plus one appended.
        for _ in 0..61 {
            phase += PHASE_STEP;
        }
        let expected = signal::reading_at(phase, before.last().unwrap().ts + Duration::milliseconds(POINT_SPACING_MS));
        assert_eq!(appended, expected);
    }
}
