#[allow(clippy::module_inception)]
pub mod auth;
pub mod login_request;
pub mod login_response;
pub mod refresh_request;
pub mod refresh_response;
