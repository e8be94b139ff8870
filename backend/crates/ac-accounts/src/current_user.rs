use crate::{AccountsError, Result as AccountsErrorResult};

use ac_auth::Principal;
use ac_core::User;
use ac_db::UserRepository;

use log::debug;

/// Reload the caller's record. A token whose identity has since vanished
/// or been deactivated no longer authenticates.
pub async fn load_active_user<'e, E>(
    executor: E,
    principal: &Principal,
) -> AccountsErrorResult<User>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    match UserRepository::find_by_id(executor, principal.user_id).await? {
        Some(user) if user.is_active => Ok(user),
        Some(_) => {
            debug!("Token for inactive user {} rejected", principal.user_id);
            Err(AccountsError::unauthorized())
        }
        None => {
            debug!("Token for unknown user {} rejected", principal.user_id);
            Err(AccountsError::unauthorized())
        }
    }
}
