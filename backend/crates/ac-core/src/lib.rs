pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::account_state::AccountState;
pub use models::capability::Capability;
pub use models::role::Role;
pub use models::user::User;
pub use validation::email::{MAX_EMAIL_LENGTH, normalize_email, validate_email};
pub use validation::field_errors::FieldErrors;
pub use validation::password_policy::{PasswordPolicy, PolicyViolation};

#[cfg(test)]
mod tests;
