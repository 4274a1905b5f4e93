use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Message carried by every non-success response. The status is not surfaced.
pub const NETWORK_NOT_OK_MESSAGE: &str = "Network response was not ok";

/// Errors that can occur while talking to the directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl DirectoryError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        DirectoryError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        DirectoryError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Non-success status from the directory
    #[track_caller]
    pub fn network_not_ok() -> Self {
        DirectoryError::Network {
            message: NETWORK_NOT_OK_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}

impl From<reqwest::Error> for DirectoryError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        DirectoryError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for DirectoryError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
