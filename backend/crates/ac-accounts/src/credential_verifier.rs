use crate::{AccountsError, Result as AccountsErrorResult};

use ac_auth::{hash_password, verify_password};
use ac_core::{User, normalize_email};
use ac_db::UserRepository;

use log::{debug, warn};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

/// Hashed lazily at first use with the configured cost
const DUMMY_PASSWORD: &str = "alumni-connect-timing-equalizer";

/// Checks an email/password pair against the identity store.
///
/// Every failure is [`AccountsError::InvalidCredentials`]; the reason is
/// only logged.
pub struct CredentialVerifier {
    pool: SqlitePool,
    bcrypt_cost: u32,
    dummy_hash: OnceCell<String>,
}

impl CredentialVerifier {
    pub fn new(pool: SqlitePool, bcrypt_cost: u32) -> Self {
        Self {
            pool,
            bcrypt_cost,
            dummy_hash: OnceCell::new(),
        }
    }

    pub async fn verify(&self, email: &str, password: &str) -> AccountsErrorResult<User> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::find_by_email(&self.pool, &email).await? else {
            // Same bcrypt work as the wrong-password path
            let dummy = self
                .dummy_hash
                .get_or_try_init(|| hash_password(DUMMY_PASSWORD, self.bcrypt_cost))
                .await?;
            let _ = verify_password(password, dummy).await;

            debug!("Login rejected: unknown email");
            return Err(AccountsError::invalid_credentials());
        };

        let matches = match verify_password(password, &user.password_hash).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Stored credential for user {} is unusable: {}", user.id, e);
                false
            }
        };

        if !matches {
            debug!("Login rejected for user {}: wrong password", user.id);
            return Err(AccountsError::invalid_credentials());
        }

        if !user.is_active {
            debug!("Login rejected for user {}: inactive", user.id);
            return Err(AccountsError::invalid_credentials());
        }

        Ok(user)
    }
}
