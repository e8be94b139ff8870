//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", ...}}`
//! with the matching HTTP status. Authentication failures carry fixed
//! messages; the underlying cause is only logged.

use ac_accounts::AccountsError;
use ac_auth::AuthError;
use ac_core::FieldErrors;
use ac_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INVALID_CREDENTIALS_MESSAGE: &str = "No active account found with the given credentials.";
const INVALID_TOKEN_MESSAGE: &str = "Token is invalid or expired.";
const UNAUTHORIZED_MESSAGE: &str = "Authentication credentials were not provided or are invalid.";
const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";
const DUPLICATE_IDENTITY_MESSAGE: &str = "A user with this email already exists.";
const NOTIFICATION_FAILED_MESSAGE: &str =
    "The invitation email could not be delivered; no account was created.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "FORBIDDEN", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// First failing field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every failing field with its messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Refresh token rejected (401)
    #[error("Invalid or expired token {location}")]
    InvalidOrExpiredToken { location: ErrorLocation },

    /// Missing or unusable access token (401)
    #[error("Unauthorized {location}")]
    Unauthorized { location: ErrorLocation },

    /// Authenticated but lacking a capability (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Field-scoped validation failure (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        fields: Option<FieldErrors>,
        location: ErrorLocation,
    },

    /// Email already registered (400)
    #[error("Duplicate identity: {email} {location}")]
    DuplicateIdentity {
        email: String,
        location: ErrorLocation,
    },

    /// Invitation mail could not be sent (502)
    #[error("Notification delivery failed: {message} {location}")]
    NotificationDelivery {
        message: String,
        location: ErrorLocation,
    },

    /// Too many login attempts (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
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
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        ApiError::Validation {
            message: errors.to_string(),
            field: errors.first_field().map(String::from),
            fields: Some(errors),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials { .. }
            | ApiError::InvalidOrExpiredToken { .. }
            | ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Validation { .. }
            | ApiError::DuplicateIdentity { .. }
            | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotificationDelivery { .. } => StatusCode::BAD_GATEWAY,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::InvalidCredentials { .. } => {
                ApiErrorBody::new("INVALID_CREDENTIALS", INVALID_CREDENTIALS_MESSAGE)
            }
            ApiError::InvalidOrExpiredToken { .. } => {
                ApiErrorBody::new("INVALID_OR_EXPIRED_TOKEN", INVALID_TOKEN_MESSAGE)
            }
            ApiError::Unauthorized { .. } => ApiErrorBody::new("UNAUTHORIZED", UNAUTHORIZED_MESSAGE),
            ApiError::Forbidden { message, .. } => ApiErrorBody::new("FORBIDDEN", message),
            ApiError::Validation {
                message,
                field,
                fields,
                ..
            } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
                fields,
            },
            ApiError::DuplicateIdentity { .. } => ApiErrorBody {
                code: "DUPLICATE_IDENTITY".into(),
                message: DUPLICATE_IDENTITY_MESSAGE.into(),
                field: Some("email".into()),
                fields: Some(FieldErrors::single("email", DUPLICATE_IDENTITY_MESSAGE)),
            },
            ApiError::NotificationDelivery { .. } => {
                ApiErrorBody::new("NOTIFICATION_DELIVERY_FAILED", NOTIFICATION_FAILED_MESSAGE)
            }
            ApiError::RateLimited { message, .. } => ApiErrorBody::new("RATE_LIMITED", message),
            ApiError::NotFound { message, .. } => ApiErrorBody::new("NOT_FOUND", message),
            ApiError::BadRequest { message, .. } => ApiErrorBody::new("BAD_REQUEST", message),
            ApiError::Internal { message, .. } => ApiErrorBody::new("INTERNAL_ERROR", message),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl ApiErrorBody {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            fields: None,
        }
    }
}

/// Convert account service errors to API errors
impl From<AccountsError> for ApiError {
    #[track_caller]
    fn from(e: AccountsError) -> Self {
        match e {
            AccountsError::InvalidCredentials { location } => {
                ApiError::InvalidCredentials { location }
            }
            AccountsError::Unauthorized { location } => ApiError::Unauthorized { location },
            AccountsError::Forbidden {
                capability,
                location,
            } => {
                log::debug!("Caller lacks capability {}", capability);
                ApiError::Forbidden {
                    message: FORBIDDEN_MESSAGE.into(),
                    location,
                }
            }
            AccountsError::Validation { errors, .. } => ApiError::validation(errors),
            AccountsError::DuplicateIdentity { email, location } => {
                ApiError::DuplicateIdentity { email, location }
            }
            AccountsError::NotificationDelivery { source, location } => {
                ApiError::NotificationDelivery {
                    message: source.to_string(),
                    location,
                }
            }
            AccountsError::Database { source, .. } => ApiError::from(source),
            AccountsError::Auth { source, .. } => ApiError::from(source),
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidOrExpiredToken { location } => {
                ApiError::InvalidOrExpiredToken { location }
            }
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Too many login attempts: at most {} per {} seconds. Try again later.",
                    limit, window_secs
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Forbidden { location, .. } => ApiError::Forbidden {
                message: FORBIDDEN_MESSAGE.into(),
                location,
            },
            AuthError::Unauthorized { location } => ApiError::Unauthorized { location },
            other if other.is_token_failure() => {
                log::debug!("Token rejected: {}", other);
                ApiError::unauthorized()
            }
            other => {
                // Signing or hashing failures are server-side problems
                log::error!("Auth error: {}", other);
                ApiError::Internal {
                    message: "Authentication subsystem failure".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail { email, location } => {
                ApiError::DuplicateIdentity { email, location }
            }
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        ApiError::from(DbError::from(e))
    }
}

/// Malformed or missing JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
