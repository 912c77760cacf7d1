use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("no time-series data available for lane '{lane_id}'")]
    LaneNotFound { lane_id: String },

    #[error("unexpected response from server (status {status}): {message}")]
    TransportError { status: u16, message: String },

    #[error("failed to load fixture '{path}': {message}")]
    FixtureError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DashboardError {
    /// Short message suitable for direct display to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LaneNotFound { .. } => {
                "No time-series data available for this lane.".to_string()
            }
            Self::HttpError(_) | Self::TransportError { .. } => {
                "Failed to reach the lane dashboard server.".to_string()
            }
            Self::FixtureError { path, .. } => {
                format!("Could not load fixture data from {}.", path)
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::LaneNotFound { .. } => "Pick a different lane from the list.",
            Self::HttpError(_) | Self::TransportError { .. } => {
                "Check that the server is running and the address is correct."
            }
            Self::FixtureError { .. } | Self::IoError(_) => {
                "Verify the fixture paths in the configuration."
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration value and retry."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
