//! Token endpoints: credential exchange and access-token refresh

use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LoginResponse, RefreshRequest,
    RefreshResponse, UserDto,
};

use ac_core::normalize_email;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /login
///
/// Exchange email and password for an access/refresh pair. The attempt is
/// counted against the per-email quota before the password is checked.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    if request.is_blank() {
        return Err(ApiError::invalid_credentials());
    }

    let email = normalize_email(&request.email);
    state.login_limiter.check(&email)?;

    let user = state.credentials.verify(&email, &request.password).await?;
    let tokens = state.issuer.issue_pair(&user)?;

    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        access: tokens.access,
        refresh: tokens.refresh,
        user: UserDto::from(user),
    }))
}

/// POST /refresh
///
/// Mint a new access token from a refresh token. Every failure is the
/// same 401 `INVALID_OR_EXPIRED_TOKEN`.
pub async fn refresh(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> ApiResult<Json<RefreshResponse>> {
    let Json(request) = payload?;
    let access = state.issuer.refresh(&request.refresh)?;

    Ok(Json(RefreshResponse { access }))
}
