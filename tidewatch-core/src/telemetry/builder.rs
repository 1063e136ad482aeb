use super::{feed::TelemetryFeed, state::Selection, window::Window};
use crate::error::TidewatchError;
use chrono::Utc;
use std::time::Duration;
use tidewatch_schemas::{
    range::TimeRange,
    station::Station,
    thresholds::{ThresholdOverrides, Thresholds},
};

/// Default poll interval between live appends.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// A fluent builder for constructing a [`TelemetryFeed`].
///
/// Station and range default to the first configured station and the 6H
/// range when not set explicitly; thresholds start from their defaults
/// with any overrides applied on top.
#[derive(Default)]
pub struct FeedBuilder {
    stations: Vec<Station>,
    station_id: Option<String>,
    range: Option<TimeRange>,
    threshold_overrides: ThresholdOverrides,
    poll_interval: Option<Duration>,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the station catalog the feed can select from.
    pub fn with_stations(mut self, stations: Vec<Station>) -> Self {
        self.stations = stations;
        self
    }

    /// Selects the initial station by id.
    pub fn with_station(mut self, station_id: &str) -> Self {
        self.station_id = Some(station_id.to_string());
        self
    }

    /// Selects the initial time range.
    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Applies partial threshold overrides on top of the defaults.
    pub fn with_threshold_overrides(mut self, overrides: ThresholdOverrides) -> Self {
        self.threshold_overrides = overrides;
        self
    }

    /// Sets the live poll interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Consumes the builder and returns a seeded, live feed.
    ///
    /// # Errors
    ///
    /// Returns a `TidewatchError` when no stations are configured, the
    /// selected station id is unknown, or the poll interval is zero.
    pub fn build(self) -> Result<TelemetryFeed, TidewatchError> {
        if self.stations.is_empty() {
            return Err(TidewatchError::NoStationsConfigured);
        }

        let station_id = match self.station_id {
            Some(id) => {
                if !self.stations.iter().any(|s| s.id == id) {
                    return Err(TidewatchError::StationNotFound(id));
                }
                id
            }
            None => self.stations[0].id.clone(),
        };

        let poll_interval = self.poll_interval.unwrap_or(DEFAULT_POLL_INTERVAL);
        if poll_interval.is_zero() {
            return Err(TidewatchError::ConfigError(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        let range = self.range.unwrap_or(TimeRange::SixHours);
        let window = Window::reseed(range, &station_id, Utc::now());

        Ok(TelemetryFeed {
            stations: self.stations,
            selection: Selection { station_id, range },
            thresholds: Thresholds::with_overrides(&self.threshold_overrides),
            poll_interval,
            window,
            live: true,
            generation: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new("STN-001", "Pacific Buoy A1"),
            Station::new("STN-002", "Harbor Tide Gauge"),
        ]
    }

    #[test]
    fn builds_with_defaults() {
        let feed = FeedBuilder::new().with_stations(stations()).build().unwrap();
        assert_eq!(feed.selection().station_id, "STN-001");
        assert_eq!(feed.selection().range, TimeRange::SixHours);
        assert_eq!(feed.window().len(), 360);
        assert!(feed.is_live());
        assert_eq!(feed.poll_interval(), DEFAULT_POLL_INTERVAL);
        assert_eq!(feed.thresholds(), &Thresholds::default());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = FeedBuilder::new().build().unwrap_err();
        assert!(matches!(err, TidewatchError::NoStationsConfigured));
    }

    #[test]
    fn unknown_station_is_rejected() {
        let err = FeedBuilder::new()
            .with_stations(stations())
            .with_station("STN-404")
            .build()
            .unwrap_err();
        assert!(matches!(err, TidewatchError::StationNotFound(id) if id == "STN-404"));
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let err = FeedBuilder::new()
            .with_stations(stations())
            .with_poll_interval(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, TidewatchError::ConfigError(_)));
    }

    #[test]
    fn threshold_overrides_apply_on_top_of_defaults() {
        let overrides = ThresholdOverrides {
            wave: Some(3.0),
            ..Default::default()
        };
        let feed = FeedBuilder::new()
            .with_stations(stations())
            .with_threshold_overrides(overrides)
            .build()
            .unwrap();
        assert_eq!(feed.thresholds().wave, 3.0);
        assert_eq!(feed.thresholds().sst, 28.0);
    }
}
