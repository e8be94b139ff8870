pub mod api;
pub mod app_state;
pub mod cli;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, refresh},
        login_request::LoginRequest,
        login_response::LoginResponse,
        refresh_request::RefreshRequest,
        refresh_response::RefreshResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    invitations::{
        invitations::{invite_admin, invite_member},
        invite_request::InviteRequest,
    },
    users::{
        change_password_request::ChangePasswordRequest,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        users::{change_password, get_me, update_me},
    },
};
pub use app_state::{AppState, build_mailer, password_policy};
pub use cli::{Cli, Command};

pub use crate::routes::build_router;
