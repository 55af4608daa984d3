use rl_core::{CoreError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use log::error;
use thiserror::Error;

/// Shown for both unknown users and wrong secrets
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Username already taken: {username} {location}")]
    Duplicate {
        username: String,
        location: ErrorLocation,
    },

    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Credential store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate<S: Into<String>>(username: S) -> Self {
        Self::Duplicate {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Duplicate { .. } => "DUPLICATE_USERNAME",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Store { .. } | Self::Hashing { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<CoreError> for AuthError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation {
                message,
                field,
                location,
            } => Self::Validation {
                message,
                field,
                location,
            },
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { username, location } => Self::Duplicate { username, location },
            StoreError::Unavailable { .. } => {
                error!("{}", err);
                Self::Store {
                    message: err.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
