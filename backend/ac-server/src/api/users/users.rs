//! Self-service endpoints for the authenticated caller

use crate::{ApiResult, AppState, AuthUser, ChangePasswordRequest, UpdateProfileRequest, UserDto};

use axum::{Json, extract::State, extract::rejection::JsonRejection};

/// GET /me
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> ApiResult<Json<UserDto>> {
    let user = state.profiles.current(&principal).await?;
    Ok(Json(user.into()))
}

/// PATCH /me
///
/// Edit display attributes of the caller's own record
pub async fn update_me(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Json(request) = payload?;
    let user = state.profiles.update(&principal, request.into()).await?;
    Ok(Json(user.into()))
}

/// POST /change-password
///
/// Rotate the caller's password and clear the forced-rotation flag.
/// No new tokens are issued.
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    payload: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let Json(request) = payload?;
    let user = state.rotation.rotate(&principal, request.into()).await?;
    Ok(Json(user.into()))
}
