//! REST API error types
//!
//! Every failure leaves the API as `{"error": "<message>", "code": "<CODE>"}`
//! with the status implied by the variant.

use rl_auth::{AuthError, INVALID_CREDENTIALS_MESSAGE};
use rl_link::LinkError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Username already registered (400)
    #[error("Duplicate username: {message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown user or wrong secret; indistinguishable on purpose (400)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Identity authority rejected or could not answer (500)
    #[error("Identity resolution failed: {message} {location}")]
    IdentityResolution {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is logged, never returned.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Duplicate { .. } | Self::InvalidCredentials { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::IdentityResolution { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Duplicate { .. } => "DUPLICATE_USERNAME",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::IdentityResolution { .. } => "IDENTITY_RESOLUTION_FAILED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (error, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::Duplicate { message, .. }
            | ApiError::IdentityResolution { message, .. }
            | ApiError::NotFound { message, .. } => (message, None),
            ApiError::InvalidCredentials { .. } => (INVALID_CREDENTIALS_MESSAGE.to_string(), None),
            ApiError::Internal { .. } => (INTERNAL_ERROR_MESSAGE.to_string(), None),
        };

        (status, Json(ApiErrorResponse { error, code, field })).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation {
                message,
                field,
                location,
            } => ApiError::Validation {
                message,
                field,
                location,
            },
            AuthError::Duplicate { location, .. } => ApiError::Duplicate {
                message: "Username already taken".to_string(),
                location,
            },
            AuthError::InvalidCredentials { location } => ApiError::InvalidCredentials { location },
            AuthError::Store { .. } | AuthError::Hashing { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<LinkError> for ApiError {
    #[track_caller]
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::Validation {
                message,
                field,
                location,
            } => ApiError::Validation {
                message,
                field,
                location,
            },
            LinkError::IdentityResolution { message, location } => {
                ApiError::IdentityResolution { message, location }
            }
            LinkError::NotFound { location, .. } => ApiError::NotFound {
                message: "User not found".to_string(),
                location,
            },
            LinkError::Store { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Malformed or non-JSON request bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::validation(format!("Invalid request body: {}", e.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::validation(format!("Invalid query string: {}", e.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
