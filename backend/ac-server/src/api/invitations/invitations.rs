//! Onboarding endpoints
//!
//! The role being created decides the capability the inviter needs:
//! admins are invited by super admins, members by any admin.

use crate::{ApiResult, AppState, AuthUser, InviteRequest, UserDto};

use ac_auth::{Principal, authorize};
use ac_core::Role;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

/// POST /admins/invite
pub async fn invite_admin(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    payload: Result<Json<InviteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    invite(state, principal, Role::Admin, payload).await
}

/// POST /members/invite
pub async fn invite_member(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    payload: Result<Json<InviteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    invite(state, principal, Role::Member, payload).await
}

async fn invite(
    state: AppState,
    principal: Principal,
    target: Role,
    payload: Result<Json<InviteRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    // Capability is checked before body errors surface
    if let Some(required) = target.onboarding_capability() {
        authorize(Some(&principal), required)?;
    }

    let Json(request) = payload?;
    let user = state
        .onboarding
        .onboard(Some(&principal), target, request.into())
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
