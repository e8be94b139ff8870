pub mod account_state;
pub mod capability;
pub mod role;
pub mod user;
