use ac_core::Capability;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Collapsed token failure: decode, signature, expiry and type mismatch
    /// all surface as this variant to callers of [`crate::JwtIssuer::refresh`].
    #[error("Invalid or expired token {location}")]
    InvalidOrExpiredToken { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Unexpected token type: expected {expected}, got {actual} {location}")]
    WrongTokenType {
        expected: String,
        actual: String,
        location: ErrorLocation,
    },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication required {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("Missing capability: {capability} {location}")]
    Forbidden {
        capability: Capability,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True for every variant produced while decoding or checking a token
    pub fn is_token_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrExpiredToken { .. }
                | Self::TokenExpired { .. }
                | Self::WrongTokenType { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
                | Self::MissingHeader { .. }
                | Self::InvalidScheme { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
