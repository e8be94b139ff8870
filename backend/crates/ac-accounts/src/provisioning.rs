use crate::Result as AccountsErrorResult;

use ac_auth::hash_password;
use ac_core::{FieldErrors, User, normalize_email, validate_email};
use ac_db::UserRepository;

use log::info;
use sqlx::SqlitePool;

#[derive(Debug)]
pub enum ProvisionOutcome {
    Created(User),
    AlreadyExists,
}

/// Create the bootstrap super admin unless the email is already registered.
///
/// The password is operator-supplied and is not run through the strength
/// policy.
pub async fn ensure_superuser(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    bcrypt_cost: u32,
) -> AccountsErrorResult<ProvisionOutcome> {
    let email = normalize_email(email);
    if let Err(message) = validate_email(&email) {
        FieldErrors::single("email", message).into_result()?;
    }
    if password.is_empty() {
        FieldErrors::single("password", "This field may not be blank.").into_result()?;
    }

    if UserRepository::find_by_email(pool, &email).await?.is_some() {
        info!("Superuser {} already exists, skipping", email);
        return Ok(ProvisionOutcome::AlreadyExists);
    }

    let password_hash = hash_password(password, bcrypt_cost).await?;
    let user = User::superuser(email, password_hash);

    match UserRepository::create(pool, &user).await {
        Ok(()) => {
            info!("Superuser {} created", user.email);
            Ok(ProvisionOutcome::Created(user))
        }
        // Lost a race with another provisioning run
        Err(ac_db::DbError::DuplicateEmail { .. }) => Ok(ProvisionOutcome::AlreadyExists),
        Err(e) => Err(e.into()),
    }
}
