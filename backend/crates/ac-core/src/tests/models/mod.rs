mod account_state;
mod role;
mod user;
