#[allow(clippy::module_inception)]
pub mod invitations;
pub mod invite_request;
