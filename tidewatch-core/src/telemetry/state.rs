use tidewatch_schemas::range::TimeRange;

/// The (station, range) pair a feed is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub station_id: String,
    pub range: TimeRange,
}

/// Coarse connection indicator surfaced next to the live toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Live,
    Paused,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Live => "Live",
            ConnectionStatus::Paused => "Paused",
        }
    }
}
