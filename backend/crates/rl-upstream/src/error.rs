use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to an upstream authority
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream returned {status}: {message} {location}")]
    Status {
        status: StatusCode,
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

    #[error("Malformed payload: {message} {location}")]
    Payload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },
}

impl UpstreamError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            String::from("request timed out")
        } else if err.is_connect() {
            String::from("connection failed")
        } else {
            err.to_string()
        };

        UpstreamError::Http {
            message,
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        UpstreamError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: StatusCode, message: String) -> Self {
        UpstreamError::Status {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn payload<S: Into<String>>(message: S) -> Self {
        UpstreamError::Payload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url<S: Into<String>>(message: S) -> Self {
        UpstreamError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable diagnostic without source locations
    pub fn diagnostic(&self) -> String {
        match self {
            UpstreamError::Http { message, .. } => format!("upstream unreachable: {}", message),
            UpstreamError::Status {
                status, message, ..
            } => format!("upstream returned {}: {}", status, message),
            UpstreamError::Json { message, .. } => format!("malformed upstream response: {}", message),
            UpstreamError::Payload { message, .. } => {
                format!("malformed upstream response: {}", message)
            }
            UpstreamError::Url { message, .. } => format!("invalid upstream URL: {}", message),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for UpstreamError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
