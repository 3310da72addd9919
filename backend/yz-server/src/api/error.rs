//! REST API error types
//!
//! Every error renders as `{"error": <message>, "code": <CODE>}` with the
//! matching status. Storage and key-handling details are logged, never sent.

use yz_auth::AuthError;
use yz_identity::IdentityError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "INVALID_TOKEN", "NOT_FOUND")
    pub code: &'static str,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or rejected bearer credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        code: &'static str,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        code: &'static str,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Overwrite the client message of a 500, keeping its code.
    /// Lets each handler say what failed ("Failed to fetch profile").
    pub fn with_internal_message(self, message: &str) -> Self {
        match self {
            ApiError::Internal { code, location, .. } => ApiError::Internal {
                message: message.to_string(),
                code,
                location,
            },
            other => other,
        }
    }

    /// Collapse any failure into a 500 with `message`, keeping its code.
    /// Malformed requests stay 400.
    pub fn into_internal(self, message: &str) -> Self {
        match self {
            ApiError::Unauthorized { code, location, .. }
            | ApiError::Internal { code, location, .. } => ApiError::Internal {
                message: message.to_string(),
                code,
                location,
            },
            ApiError::NotFound { location, .. } => ApiError::Internal {
                message: message.to_string(),
                code: "NOT_FOUND",
                location,
            },
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::Unauthorized { message, code, .. } => ApiErrorResponse {
                error: message,
                code,
            },
            ApiError::NotFound { message, .. } => ApiErrorResponse {
                error: message,
                code: "NOT_FOUND",
            },
            ApiError::BadRequest { message, .. } => ApiErrorResponse {
                error: message,
                code: "BAD_REQUEST",
            },
            ApiError::Internal { message, code, .. } => ApiErrorResponse {
                error: message,
                code,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert credential errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if e.is_credential_failure() {
            log::warn!("Credential rejected: {}", e);
            ApiError::Unauthorized {
                message: e.public_message().to_string(),
                code: e.error_code(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Internal {
                message: e.public_message().to_string(),
                code: e.error_code(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

/// Convert identity service errors to API errors
impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::Auth { source, .. } => source.into(),
            IdentityError::NotFound { .. } => ApiError::NotFound {
                message: "User not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            IdentityError::Persistence { source, .. } => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", source);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    code: "PERSISTENCE_FAILURE",
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
