//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use ac_auth::{AuthError, JwtValidator, Principal, Result as AuthErrorResult, TokenType};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use http::{HeaderMap, header::AUTHORIZATION};

const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated caller, taken from `Authorization: Bearer <access token>`.
///
/// Missing, malformed, expired and refresh tokens are all rejected with
/// 401 `UNAUTHORIZED`.
pub struct AuthUser(pub Principal);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match principal_from_headers(&parts.headers, state.issuer.validator()) {
                Ok(principal) => Ok(AuthUser(principal)),
                Err(e) => {
                    log::debug!("Rejected bearer token: {}", e);
                    Err(ApiError::unauthorized())
                }
            }
        }
    }
}

/// Validate the bearer access token in `headers`
#[track_caller]
pub fn principal_from_headers(
    headers: &HeaderMap,
    validator: &JwtValidator,
) -> AuthErrorResult<Principal> {
    let location = Location::caller();

    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(location),
        })?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(location),
        })?;

    let claims = validator.validate_as(token, TokenType::Access)?;
    Principal::from_claims(&claims)
}
