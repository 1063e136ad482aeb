use super::{
    state::{ConnectionStatus, Selection},
    window::Window,
};
use crate::{
    derived::{self, DerivedState},
    error::TidewatchError,
};
use chrono::Utc;
use std::time::Duration;
use tidewatch_schemas::{range::TimeRange, station::Station, thresholds::Thresholds};

/// Result of delivering one scheduled tick to a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One reading was appended (and the oldest evicted if at capacity).
    Appended,
    /// Live mode is off; the window was left untouched.
    Suspended,
    /// The tick was scheduled against an earlier generation (a reseed
    /// happened in between) and was discarded.
    Stale,
}

/// Timer-driven owner of one window.
///
/// The feed is single-threaded: the caller schedules ticks by capturing
/// `generation()` and later calling [`TelemetryFeed::tick`] with it. Any
/// reseed bumps the generation, so a tick that was scheduled against the
/// old window lands as [`TickOutcome::Stale`] and mutates nothing. That
/// counter is the substitute for timer-handle cancellation when the host
/// runtime cannot guarantee it.
#[derive(Debug)]
pub struct TelemetryFeed {
    pub(super) stations: Vec<Station>,
    pub(super) selection: Selection,
    pub(super) thresholds: Thresholds,
    pub(super) poll_interval: Duration,
    pub(super) window: Window,
    pub(super) live: bool,
    pub(super) generation: u64,
}

impl TelemetryFeed {
    /// Replaces the window with a fresh seed for the new selection and
    /// invalidates all outstanding ticks.
    pub fn reseed(&mut self, range: TimeRange, station_id: &str) -> Result<(), TidewatchError> {
        if !self.stations.iter().any(|s| s.id == station_id) {
            return Err(TidewatchError::StationNotFound(station_id.to_string()));
        }
        self.selection = Selection {
            station_id: station_id.to_string(),
            range,
        };
        self.window = Window::reseed(range, station_id, Utc::now());
        self.generation += 1;
        Ok(())
    }

    /// Changes only the range, keeping the current station.
    pub fn set_range(&mut self, range: TimeRange) -> Result<(), TidewatchError> {
        let station_id = self.selection.station_id.clone();
        self.reseed(range, &station_id)
    }

    /// Delivers one tick scheduled under `generation`. Appends exactly one
    /// reading when live and current; otherwise leaves the window alone.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if generation != self.generation {
            return TickOutcome::Stale;
        }
        if !self.live {
            return TickOutcome::Suspended;
        }
        self.window.append_next(Utc::now());
        TickOutcome::Appended
    }

    /// Suspends or resumes ticking. Disabling never clears the window;
    /// re-enabling resumes from the current tail without a reseed.
    pub fn set_live(&mut self, live: bool) {
        self.live = live;
    }

    /// The dashboard's "refresh" idiom: live off then immediately back on.
    /// The window and generation are untouched, so no points are dropped
    /// or duplicated.
    pub fn refresh(&mut self) {
        self.set_live(false);
        self.set_live(true);
    }

    /// Derived per-metric state for the current window tail.
    pub fn derived(&self) -> DerivedState {
        derived::compute(&self.window, &self.thresholds)
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.window.is_empty() {
            ConnectionStatus::Connecting
        } else if self.live {
            ConnectionStatus::Live
        } else {
            ConnectionStatus::Paused
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn station_name(&self) -> &str {
        self.stations
            .iter()
            .find(|s| s.id == self.selection.station_id)
            .map(|s| s.name.as_str())
            .unwrap_or(self.selection.station_id.as_str())
    }
}
