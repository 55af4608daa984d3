use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific input field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Upstream identity lookup failed. Fatal to linking.
#[derive(Error, Debug)]
#[error("Identity resolution failed: {message} {location}")]
pub struct IdentityResolutionError {
    /// Diagnostic reported by (or about) the identity authority
    pub message: String,
    pub location: ErrorLocation,
}

impl IdentityResolutionError {
    #[track_caller]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Errors surfaced through the `IdentityStore` port
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Username already registered: {username} {location}")]
    Duplicate {
        username: String,
        location: ErrorLocation,
    },

    #[error("Identity store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn duplicate<S: Into<String>>(username: S) -> Self {
        StoreError::Duplicate {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        StoreError::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
pub type StoreResult<T> = StdResult<T, StoreError>;
