use crate::{AccountsError, Result as AccountsErrorResult, invitation_message};

use ac_auth::{Principal, authorize, hash_password};
use ac_core::{
    Capability, FieldErrors, PasswordPolicy, Role, User, normalize_email, validate_email,
};
use ac_db::UserRepository;
use ac_mail::{MailError, MailMessage, Mailer, Result as MailErrorResult};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use sqlx::SqlitePool;

const MAX_NAME_LENGTH: usize = 150;

/// Values that shape onboarding side effects
#[derive(Debug, Clone)]
pub struct OnboardingSettings {
    /// Base URL of the web client, used for the login link
    pub frontend_url: String,
    pub bcrypt_cost: u32,
    /// Upper bound on the notification dispatch. The identity row's write
    /// lock is held for this long at most, so it must stay below the
    /// store's busy timeout.
    pub dispatch_timeout: Duration,
}

/// Onboarding payload. `temporary_password` is plaintext and must not be logged.
#[derive(Clone)]
pub struct InvitationRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub temporary_password: String,
}

pub struct OnboardingService {
    pool: SqlitePool,
    mailer: Arc<dyn Mailer>,
    policy: PasswordPolicy,
    settings: OnboardingSettings,
}

impl OnboardingService {
    pub fn new(
        pool: SqlitePool,
        mailer: Arc<dyn Mailer>,
        policy: PasswordPolicy,
        settings: OnboardingSettings,
    ) -> Self {
        Self {
            pool,
            mailer,
            policy,
            settings,
        }
    }

    /// Create an identity with `target` role and a forced rotation, then
    /// mail the temporary credential.
    ///
    /// The insert and the mail dispatch share one transaction: a duplicate
    /// email, a failed delivery or a dispatch exceeding
    /// [`OnboardingSettings::dispatch_timeout`] leaves no row behind.
    pub async fn onboard(
        &self,
        inviter: Option<&Principal>,
        target: Role,
        request: InvitationRequest,
    ) -> AccountsErrorResult<User> {
        let Some(required) = target.onboarding_capability() else {
            // No capability onboards a super admin
            authorize(inviter, Capability::SuperAdmin)?;
            return Err(AccountsError::forbidden(Capability::SuperAdmin));
        };
        let inviter = authorize(inviter, required)?;

        let email = normalize_email(&request.email);
        let first_name = request.first_name.trim().to_string();
        let last_name = request.last_name.trim().to_string();
        self.validate(&email, &first_name, &last_name, &request.temporary_password)?;

        // Hash before opening the transaction; bcrypt is slow
        let password_hash =
            hash_password(&request.temporary_password, self.settings.bcrypt_cost).await?;
        let user = User::invited(email, first_name, last_name, target, password_hash);

        let mut tx = self.pool.begin().await?;
        UserRepository::create(&mut *tx, &user).await?;

        let message = invitation_message(
            &user,
            &request.temporary_password,
            &self.settings.frontend_url,
        );
        if let Err(e) = self.dispatch(&message).await {
            warn!(
                "Invitation to {} not delivered via {}, rolling back: {}",
                user.email,
                self.mailer.name(),
                e
            );
            return Err(e.into());
        }

        tx.commit().await?;

        info!(
            "User {} onboarded {} as {}",
            inviter.user_id, user.email, user.role
        );
        Ok(user)
    }

    async fn dispatch(&self, message: &MailMessage) -> MailErrorResult<()> {
        let timeout = self.settings.dispatch_timeout;
        match tokio::time::timeout(timeout, self.mailer.send(message)).await {
            Ok(sent) => sent,
            Err(_) => Err(MailError::delivery(format!(
                "{} transport did not answer within {}ms",
                self.mailer.name(),
                timeout.as_millis()
            ))),
        }
    }

    fn validate(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        temporary_password: &str,
    ) -> AccountsErrorResult<()> {
        let mut errors = FieldErrors::new();

        if let Err(message) = validate_email(email) {
            errors.add("email", message);
        }
        check_name("first_name", first_name, &mut errors);
        check_name("last_name", last_name, &mut errors);

        let local_part = email.split('@').next().unwrap_or_default();
        self.policy.check_field(
            "temporary_password",
            temporary_password,
            &[
                ("email", local_part),
                ("first_name", first_name),
                ("last_name", last_name),
            ],
            &mut errors,
        );

        Ok(errors.into_result()?)
    }
}

fn check_name(field: &str, value: &str, errors: &mut FieldErrors) {
    if value.is_empty() {
        errors.add(field, "This field may not be blank.");
    } else if value.chars().count() > MAX_NAME_LENGTH {
        errors.add(
            field,
            format!("Ensure this field has no more than {MAX_NAME_LENGTH} characters."),
        );
    }
}
