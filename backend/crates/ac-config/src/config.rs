use crate::{
    AuthConfig, BootstrapConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, MailConfig,
    PasswordPolicyConfig, RateLimitConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub password_policy: PasswordPolicyConfig,
    pub rate_limit: RateLimitConfig,
    pub mail: MailConfig,
    pub bootstrap: BootstrapConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AC_CONFIG_DIR env var, else use ./.alumni/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AC_CONFIG_DIR env var > ./.alumni/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.password_policy.validate()?;
        self.rate_limit.validate()?;
        self.mail.validate()?;
        self.bootstrap.validate()?;

        // Onboarding holds the write lock while the invitation is dispatched
        if self.mail.timeout_secs >= self.database.busy_timeout_secs {
            return Err(ConfigError::mail(format!(
                "mail.timeout_secs ({}) must be below database.busy_timeout_secs ({})",
                self.mail.timeout_secs, self.database.busy_timeout_secs
            )));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  auth: HS256, access={}s, refresh={}s, leeway={}s, bcrypt cost={}",
            self.auth.access_token_ttl_secs,
            self.auth.refresh_token_ttl_secs,
            self.auth.leeway_secs,
            self.auth.bcrypt_cost
        );
        info!(
            "  password_policy: {}-{} chars, common={}, numeric={}, similar={}",
            self.password_policy.min_length,
            self.password_policy.max_length,
            self.password_policy.reject_common,
            self.password_policy.reject_numeric,
            self.password_policy.reject_similar_to_user
        );
        info!(
            "  rate_limit: {} logins/{}s per email",
            self.rate_limit.login_max_attempts, self.rate_limit.login_window_secs
        );
        info!(
            "  mail: {} (from {}, timeout {}s)",
            self.mail.transport.map_or("unset", |t| t.as_str()),
            self.mail.from,
            self.mail.timeout_secs
        );
        info!(
            "  bootstrap: {}",
            if self.bootstrap.superuser().is_some() {
                "superuser configured"
            } else {
                "none"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );

        if self.mail.transport == Some(crate::MailTransport::Memory) {
            warn!("  mail transport is 'memory': invitations are not delivered");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AC_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string(
            "AC_SERVER_CORS_ALLOWED_ORIGIN",
            &mut self.server.cors_allowed_origin,
        );

        // Database
        Self::apply_env_string("AC_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "AC_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "AC_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("AC_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "AC_AUTH_ACCESS_TOKEN_TTL_SECS",
            &mut self.auth.access_token_ttl_secs,
        );
        Self::apply_env_parse(
            "AC_AUTH_REFRESH_TOKEN_TTL_SECS",
            &mut self.auth.refresh_token_ttl_secs,
        );
        Self::apply_env_parse("AC_AUTH_LEEWAY_SECS", &mut self.auth.leeway_secs);
        Self::apply_env_parse("AC_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);

        // Password policy
        Self::apply_env_parse(
            "AC_PASSWORD_MIN_LENGTH",
            &mut self.password_policy.min_length,
        );
        Self::apply_env_parse(
            "AC_PASSWORD_MAX_LENGTH",
            &mut self.password_policy.max_length,
        );
        Self::apply_env_bool(
            "AC_PASSWORD_REJECT_COMMON",
            &mut self.password_policy.reject_common,
        );
        Self::apply_env_bool(
            "AC_PASSWORD_REJECT_NUMERIC",
            &mut self.password_policy.reject_numeric,
        );
        Self::apply_env_bool(
            "AC_PASSWORD_REJECT_SIMILAR",
            &mut self.password_policy.reject_similar_to_user,
        );

        // Rate limit
        Self::apply_env_parse(
            "AC_RATE_LIMIT_LOGIN_MAX_ATTEMPTS",
            &mut self.rate_limit.login_max_attempts,
        );
        Self::apply_env_parse(
            "AC_RATE_LIMIT_LOGIN_WINDOW_SECS",
            &mut self.rate_limit.login_window_secs,
        );

        // Mail
        Self::apply_env_option_parse("AC_MAIL_TRANSPORT", &mut self.mail.transport);
        Self::apply_env_option_string("AC_MAIL_RELAY_URL", &mut self.mail.relay_url);
        Self::apply_env_option_string("AC_MAIL_API_KEY", &mut self.mail.api_key);
        Self::apply_env_string("AC_MAIL_FROM", &mut self.mail.from);
        Self::apply_env_string("AC_MAIL_FRONTEND_URL", &mut self.mail.frontend_url);
        Self::apply_env_parse("AC_MAIL_TIMEOUT_SECS", &mut self.mail.timeout_secs);

        // Bootstrap
        Self::apply_env_option_string("AC_SUPERUSER_EMAIL", &mut self.bootstrap.superuser_email);
        Self::apply_env_option_string(
            "AC_SUPERUSER_PASSWORD",
            &mut self.bootstrap.superuser_password,
        );

        // Logging
        Self::apply_env_parse("AC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("AC_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("AC_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Like `apply_env_parse`, for optional settings
    fn apply_env_option_parse<T: std::str::FromStr>(var_name: &str, target: &mut Option<T>) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = Some(parsed);
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
