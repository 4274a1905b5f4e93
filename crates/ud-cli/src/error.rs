use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use ud_directory::DirectoryError;

pub const SIGN_UP_FIELDS_MESSAGE: &str = "Please fill in both name and email.";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ud_config::ConfigError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not signed in. Run `ud session sign-up` first. {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Sign up failed. Please try again. {location}")]
    SignUpFailed { location: ErrorLocation },

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Failed to serialize output: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Validation error at caller location.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotSignedIn error at caller location.
    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates SignUpFailed error at caller location.
    #[track_caller]
    pub fn sign_up_failed() -> Self {
        Self::SignUpFailed {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
