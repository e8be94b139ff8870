use crate::{AccountsError, Result as AccountsErrorResult, load_active_user};

use ac_auth::{Principal, hash_password};
use ac_core::{FieldErrors, PasswordPolicy, User};
use ac_db::UserRepository;

use log::info;
use sqlx::SqlitePool;

/// Both fields are plaintext and must not be logged.
#[derive(Clone)]
pub struct ChangePasswordRequest {
    pub new_password: String,
    pub confirm_password: String,
}

/// Replaces the caller's own credential and clears the forced-rotation flag.
pub struct PasswordRotationService {
    pool: SqlitePool,
    policy: PasswordPolicy,
    bcrypt_cost: u32,
}

impl PasswordRotationService {
    pub fn new(pool: SqlitePool, policy: PasswordPolicy, bcrypt_cost: u32) -> Self {
        Self {
            pool,
            policy,
            bcrypt_cost,
        }
    }

    pub async fn rotate(
        &self,
        principal: &Principal,
        request: ChangePasswordRequest,
    ) -> AccountsErrorResult<User> {
        let user = load_active_user(&self.pool, principal).await?;

        if request.new_password != request.confirm_password {
            return Err(AccountsError::validation(FieldErrors::single(
                "confirm_password",
                "The two password fields didn't match.",
            )));
        }

        let mut errors = FieldErrors::new();
        self.policy.check_field(
            "new_password",
            &request.new_password,
            &[
                ("email", user.email_local_part()),
                ("first_name", user.first_name.as_str()),
                ("last_name", user.last_name.as_str()),
            ],
            &mut errors,
        );
        errors.into_result()?;

        let password_hash = hash_password(&request.new_password, self.bcrypt_cost).await?;

        if !UserRepository::update_password(&self.pool, user.id, &password_hash).await? {
            return Err(AccountsError::unauthorized());
        }

        info!("User {} rotated their password", user.id);

        load_active_user(&self.pool, principal).await
    }
}
