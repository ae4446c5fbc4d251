//! Weather client error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl WeatherError {
    /// HTTP status reported by the service, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }

    /// Whether the service rejected the location (unknown city or country code)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
