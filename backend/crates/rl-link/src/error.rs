use rl_core::{CoreError, IdentityResolutionError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Carries the identity authority's diagnostic
    #[error("Identity resolution failed: {message} {location}")]
    IdentityResolution {
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {username} {location}")]
    NotFound {
        username: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl LinkError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(username: S) -> Self {
        Self::NotFound {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::IdentityResolution { .. } => "IDENTITY_RESOLUTION_FAILED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Store { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<CoreError> for LinkError {
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

impl From<IdentityResolutionError> for LinkError {
    fn from(err: IdentityResolutionError) -> Self {
        Self::IdentityResolution {
            message: err.message,
            location: err.location,
        }
    }
}

impl From<StoreError> for LinkError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        error!("{}", err);
        Self::Store {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
