//! Error types for everything around the (infallible) report parser

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors raised while obtaining, vetting or emitting a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O error reading a captured report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// smartctl is not installed on the queried host
    #[error("smartctl command not found on the remote server, install smartmontools")]
    CommandNotFound,

    /// The collection script wrote something to stderr
    #[error("command execution error: {0}")]
    CommandFailed(String),

    /// The report did not contain a single device section
    #[error("no devices found in smartctl output")]
    NoDevices,

    /// Failed to serialize records
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
