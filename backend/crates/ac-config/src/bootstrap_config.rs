use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Optional super admin created at startup when absent
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub superuser_email: Option<String>,
    pub superuser_password: Option<String>,
}

impl BootstrapConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match (&self.superuser_email, &self.superuser_password) {
            (Some(_), None) | (None, Some(_)) => Err(ConfigError::config(
                "bootstrap.superuser_email and bootstrap.superuser_password must be set together",
            )),
            (Some(email), Some(_)) if email.trim().is_empty() => Err(ConfigError::config(
                "bootstrap.superuser_email cannot be empty",
            )),
            (Some(_), Some(password)) if password.is_empty() => Err(ConfigError::config(
                "bootstrap.superuser_password cannot be empty",
            )),
            _ => Ok(()),
        }
    }

    /// Email and password when both are configured
    pub fn superuser(&self) -> Option<(&str, &str)> {
        match (&self.superuser_email, &self.superuser_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}

impl std::fmt::Debug for BootstrapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapConfig")
            .field("superuser_email", &self.superuser_email)
            .field(
                "superuser_password",
                &self.superuser_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
