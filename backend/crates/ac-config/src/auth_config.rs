use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_BCRYPT_COST,
    DEFAULT_LEEWAY_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS,
    MAX_BCRYPT_COST, MAX_LEEWAY_SECS, MAX_REFRESH_TOKEN_TTL_SECS, MIN_ACCESS_TOKEN_TTL_SECS,
    MIN_BCRYPT_COST, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

/// Token signing and credential hashing settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret (required)
    pub jwt_secret: Option<String>,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
    /// Clock skew tolerance when validating expiry
    pub leeway_secs: u64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set AC_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_ACCESS_TOKEN_TTL_SECS..=MAX_ACCESS_TOKEN_TTL_SECS)
            .contains(&self.access_token_ttl_secs)
        {
            return Err(ConfigError::auth(format!(
                "auth.access_token_ttl_secs must be {}-{}, got {}",
                MIN_ACCESS_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS, self.access_token_ttl_secs
            )));
        }

        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs
            || self.refresh_token_ttl_secs > MAX_REFRESH_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl_secs must exceed access_token_ttl_secs ({}) and be at most {}, got {}",
                self.access_token_ttl_secs, MAX_REFRESH_TOKEN_TTL_SECS, self.refresh_token_ttl_secs
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be at most {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }

    /// Secret bytes; empty when unset (validate() rejects that case)
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or_default().as_bytes()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("refresh_token_ttl_secs", &self.refresh_token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
