use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("GitHub request failed for {repo}: {message} {location}")]
    Http {
        repo: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub returned {status} for {repo} {location}")]
    Upstream {
        repo: String,
        status: u16,
        location: ErrorLocation,
    },

    #[error("Unexpected GitHub payload for {repo}: {message} {location}")]
    Decode {
        repo: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("GitHub client configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl StatsError {
    #[track_caller]
    pub fn http(repo: &str, err: reqwest::Error) -> Self {
        StatsError::Http {
            repo: repo.to_string(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn upstream(repo: &str, status: u16) -> Self {
        StatsError::Upstream {
            repo: repo.to_string(),
            status,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(repo: &str, message: impl ToString) -> Self {
        StatsError::Decode {
            repo: repo.to_string(),
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        StatsError::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
