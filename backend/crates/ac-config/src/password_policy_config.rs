use crate::{
    BCRYPT_MAX_PASSWORD_BYTES, ConfigError, ConfigErrorResult, DEFAULT_PASSWORD_MIN_LENGTH,
};

use serde::Deserialize;

/// Strength rules for temporary and rotated passwords
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordPolicyConfig {
    pub min_length: usize,
    /// bcrypt ignores everything past 72 bytes
    pub max_length: usize,
    pub reject_common: bool,
    pub reject_numeric: bool,
    pub reject_similar_to_user: bool,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            max_length: BCRYPT_MAX_PASSWORD_BYTES,
            reject_common: true,
            reject_numeric: true,
            reject_similar_to_user: true,
        }
    }
}

impl PasswordPolicyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_length == 0 {
            return Err(ConfigError::config(
                "password_policy.min_length must be at least 1",
            ));
        }

        if self.max_length > BCRYPT_MAX_PASSWORD_BYTES {
            return Err(ConfigError::config(format!(
                "password_policy.max_length must be at most {}, got {}",
                BCRYPT_MAX_PASSWORD_BYTES, self.max_length
            )));
        }

        if self.min_length > self.max_length {
            return Err(ConfigError::config(format!(
                "password_policy.min_length ({}) cannot exceed max_length ({})",
                self.min_length, self.max_length
            )));
        }

        Ok(())
    }
}
