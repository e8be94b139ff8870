use ac_auth::AuthError;
use ac_core::{Capability, CoreError, FieldErrors};
use ac_db::DbError;
use ac_mail::MailError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountsError {
    /// Unknown email, wrong password and inactive identity all map here
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Authentication required {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("Missing capability: {capability} {location}")]
    Forbidden {
        capability: Capability,
        location: ErrorLocation,
    },

    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: FieldErrors,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateIdentity {
        email: String,
        location: ErrorLocation,
    },

    #[error("Notification delivery failed: {source} {location}")]
    NotificationDelivery {
        #[source]
        source: MailError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl AccountsError {
    #[track_caller]
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            errors,
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
    pub fn forbidden(capability: Capability) -> Self {
        Self::Forbidden {
            capability,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AccountsError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::DuplicateEmail { email, location } => Self::DuplicateIdentity { email, location },
            other => Self::Database {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<sqlx::Error> for AccountsError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        Self::from(DbError::from(err))
    }
}

impl From<AuthError> for AccountsError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized { location } => Self::Unauthorized { location },
            AuthError::Forbidden {
                capability,
                location,
            } => Self::Forbidden {
                capability,
                location,
            },
            other => Self::Auth {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<MailError> for AccountsError {
    #[track_caller]
    fn from(err: MailError) -> Self {
        Self::NotificationDelivery {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AccountsError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { errors, location } => Self::Validation { errors, location },
            other => Self::validation(FieldErrors::single("non_field_errors", other.to_string())),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountsError>;
