use thiserror::Error;
use tidewatch_schemas::metric::MetricKey;

#[derive(Debug, Error)]
pub enum TidewatchError {
    #[error("Station '{0}' not found in the configured catalog")]
    StationNotFound(String),

    #[error("'{0}' is not a recognized time range (expected 1H, 6H, 24H or 7D)")]
    UnknownRange(String),

    #[error("At least one station must be configured")]
    NoStationsConfigured,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Reading {index} has a non-finite {metric} value; refusing to encode")]
    NonFiniteSample { metric: MetricKey, index: usize },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to encode CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Export output is not valid UTF-8: {0}")]
    ExportEncoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to process JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),
}
