pub mod change_password_request;
pub mod update_profile_request;
pub mod user_dto;
#[allow(clippy::module_inception)]
pub mod users;
