use crate::{AuthError, Claims, JwtValidator, Result as AuthErrorResult, TokenPair, TokenType};

use ac_core::User;

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use log::debug;

/// Token validity windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            access: Duration::from_secs(300),
            refresh: Duration::from_secs(86_400),
        }
    }
}

/// Mints and refreshes HS256 tokens. Holds its own validator so that the
/// same secret signs and verifies.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    validator: JwtValidator,
    lifetimes: TokenLifetimes,
}

impl JwtIssuer {
    pub fn new(secret: &[u8], lifetimes: TokenLifetimes, leeway_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            validator: JwtValidator::with_hs256(secret, leeway_secs),
            lifetimes,
        }
    }

    pub fn validator(&self) -> &JwtValidator {
        &self.validator
    }

    /// Access and refresh token for a verified identity
    #[track_caller]
    pub fn issue_pair(&self, user: &User) -> AuthErrorResult<TokenPair> {
        let now = Utc::now().timestamp();

        let access = Claims::for_user(
            user,
            TokenType::Access,
            now,
            now + self.lifetimes.access.as_secs() as i64,
        );
        let refresh = Claims::for_user(
            user,
            TokenType::Refresh,
            now,
            now + self.lifetimes.refresh.as_secs() as i64,
        );

        Ok(TokenPair {
            access: self.sign(&access)?,
            refresh: self.sign(&refresh)?,
        })
    }

    /// New access token from a refresh token. Every failure collapses into
    /// [`AuthError::InvalidOrExpiredToken`].
    #[track_caller]
    pub fn refresh(&self, refresh_token: &str) -> AuthErrorResult<String> {
        let claims = self
            .validator
            .validate_as(refresh_token, TokenType::Refresh)
            .map_err(|e| {
                debug!("Refresh rejected: {}", e);
                AuthError::InvalidOrExpiredToken {
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let now = Utc::now().timestamp();
        let access = Claims {
            iat: now,
            exp: now + self.lifetimes.access.as_secs() as i64,
            token_type: TokenType::Access,
            ..claims
        };

        self.sign(&access)
    }

    #[track_caller]
    fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
