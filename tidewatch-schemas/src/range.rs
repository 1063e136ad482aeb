use serde::{Deserialize, Serialize};

/// Hard cap on window length regardless of range, for render performance.
pub const MAX_WINDOW_POINTS: usize = 600;

/// Display duration selector controlling how many one-minute points a
/// window holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1H")]
    OneHour,
    #[serde(rename = "6H")]
    SixHours,
    #[serde(rename = "24H")]
    Day,
    #[serde(rename = "7D")]
    Week,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::OneHour,
        TimeRange::SixHours,
        TimeRange::Day,
        TimeRange::Week,
    ];

    /// Nominal number of one-minute points the range spans.
    pub const fn capacity_points(&self) -> usize {
        match self {
            TimeRange::OneHour => 60,
            TimeRange::SixHours => 60 * 6,
            TimeRange::Day => 60 * 24,
            TimeRange::Week => 60 * 24 * 7,
        }
    }

    /// Effective window capacity: the nominal point count capped at
    /// [`MAX_WINDOW_POINTS`].
    pub const fn window_points(&self) -> usize {
        let points = self.capacity_points();
        if points > MAX_WINDOW_POINTS {
            MAX_WINDOW_POINTS
        } else {
            points
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::OneHour => "1H",
            TimeRange::SixHours => "6H",
            TimeRange::Day => "24H",
            TimeRange::Week => "7D",
        }
    }

    /// Parses a range code such as `"6H"`. Returns `None` for anything
    /// outside the four supported codes; the caller maps that to its own
    /// configuration error.
    pub fn from_code(code: &str) -> Option<TimeRange> {
        match code {
            "1H" => Some(TimeRange::OneHour),
            "6H" => Some(TimeRange::SixHours),
            "24H" => Some(TimeRange::Day),
            "7D" => Some(TimeRange::Week),
            _ => None,
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_the_four_supported_codes() {
        assert_eq!(TimeRange::from_code("1H"), Some(TimeRange::OneHour));
        assert_eq!(TimeRange::from_code("6H"), Some(TimeRange::SixHours));
        assert_eq!(TimeRange::from_code("24H"), Some(TimeRange::Day));
        assert_eq!(TimeRange::from_code("7D"), Some(TimeRange::Week));
    }

    #[test]
    fn from_code_rejects_unrecognized_codes() {
        assert_eq!(TimeRange::from_code("2H"), None);
        assert_eq!(TimeRange::from_code("1h"), None);
        assert_eq!(TimeRange::from_code("7d"), None);
        assert_eq!(TimeRange::from_code(""), None);
        assert_eq!(TimeRange::from_code(" 6H"), None);
    }

    #[test]
    fn codes_round_trip_through_display() {
        for range in TimeRange::ALL {
            assert_eq!(TimeRange::from_code(range.as_str()), Some(range));
        }
    }

    #[test]
    fn window_points_are_capped_for_long_ranges() {
        assert_eq!(TimeRange::OneHour.window_points(), 60);
        assert_eq!(TimeRange::SixHours.window_points(), 360);
        assert_eq!(TimeRange::Day.window_points(), MAX_WINDOW_POINTS);
        assert_eq!(TimeRange::Week.window_points(), MAX_WINDOW_POINTS);
    }
}
