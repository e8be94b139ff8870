use crate::error::Result as ServerErrorResult;

use ac_accounts::{
    CredentialVerifier, OnboardingService, OnboardingSettings, PasswordRotationService,
    ProfileService,
};
use ac_auth::{JwtIssuer, LoginRateLimiter, RateLimitConfig, TokenLifetimes};
use ac_config::{Config, MailConfig, MailTransport, PasswordPolicyConfig};
use ac_core::PasswordPolicy;
use ac_mail::{HttpMailer, Mailer, MemoryMailer};

use std::sync::Arc;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;

/// Shared state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<JwtIssuer>,
    pub credentials: Arc<CredentialVerifier>,
    pub onboarding: Arc<OnboardingService>,
    pub rotation: Arc<PasswordRotationService>,
    pub profiles: Arc<ProfileService>,
    pub login_limiter: Arc<LoginRateLimiter>,
    /// Web client origin allowed by CORS
    pub cors_allowed_origin: Option<String>,
}

impl AppState {
    /// Wire every service from validated configuration
    pub fn new(pool: SqlitePool, config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        let bcrypt_cost = config.auth.bcrypt_cost;
        let policy = password_policy(&config.password_policy);

        let issuer = JwtIssuer::new(
            config.auth.jwt_secret_bytes(),
            TokenLifetimes {
                access: Duration::from_secs(config.auth.access_token_ttl_secs),
                refresh: Duration::from_secs(config.auth.refresh_token_ttl_secs),
            },
            config.auth.leeway_secs,
        );

        let onboarding = OnboardingService::new(
            pool.clone(),
            mailer,
            policy.clone(),
            OnboardingSettings {
                frontend_url: config.mail.frontend_url.clone(),
                bcrypt_cost,
                dispatch_timeout: Duration::from_secs(config.mail.timeout_secs),
            },
        );

        let login_limiter = LoginRateLimiter::new(RateLimitConfig {
            max_attempts: config.rate_limit.login_max_attempts,
            window_secs: config.rate_limit.login_window_secs,
        });

        Self {
            issuer: Arc::new(issuer),
            credentials: Arc::new(CredentialVerifier::new(pool.clone(), bcrypt_cost)),
            onboarding: Arc::new(onboarding),
            rotation: Arc::new(PasswordRotationService::new(
                pool.clone(),
                policy,
                bcrypt_cost,
            )),
            profiles: Arc::new(ProfileService::new(pool.clone())),
            login_limiter: Arc::new(login_limiter),
            cors_allowed_origin: config.server.cors_allowed_origin.clone(),
            pool,
        }
    }
}

pub fn password_policy(config: &PasswordPolicyConfig) -> PasswordPolicy {
    PasswordPolicy {
        min_length: config.min_length,
        max_length: config.max_length,
        reject_common: config.reject_common,
        reject_numeric: config.reject_numeric,
        reject_similar_to_user: config.reject_similar_to_user,
    }
}

/// Select the notification transport named by `mail.transport`
pub fn build_mailer(config: &MailConfig) -> ServerErrorResult<Arc<dyn Mailer>> {
    let transport = config
        .transport
        .ok_or_else(|| ac_mail::MailError::config("mail.transport is not set"))?;

    let mailer: Arc<dyn Mailer> = match transport {
        MailTransport::Memory => Arc::new(MemoryMailer::new()),
        MailTransport::Http => {
            let relay_url = config
                .relay_url
                .as_deref()
                .ok_or_else(|| ac_mail::MailError::config("mail.relay_url is not set"))?;
            Arc::new(HttpMailer::new(
                relay_url,
                &config.from,
                config.api_key.as_deref(),
                Duration::from_secs(config.timeout_secs),
            )?)
        }
    };

    info!("Mail transport: {}", mailer.name());
    Ok(mailer)
}
