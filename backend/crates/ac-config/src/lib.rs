mod auth_config;
mod bootstrap_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mail_config;
mod password_policy_config;
mod rate_limit_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use bootstrap_config::BootstrapConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mail_config::{MailConfig, MailTransport};
pub use password_policy_config::PasswordPolicyConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "AC_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".alumni";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "alumni.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_DATABASE_BUSY_TIMEOUT_SECS: u64 = 30;
const MIN_DATABASE_BUSY_TIMEOUT_SECS: u64 = 1;
const MAX_DATABASE_BUSY_TIMEOUT_SECS: u64 = 300;

// Auth
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 300;
const MIN_ACCESS_TOKEN_TTL_SECS: u64 = 60;
const MAX_ACCESS_TOKEN_TTL_SECS: u64 = 86_400;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 86_400;
const MAX_REFRESH_TOKEN_TTL_SECS: u64 = 30 * 86_400;
const DEFAULT_LEEWAY_SECS: u64 = 30;
const MAX_LEEWAY_SECS: u64 = 300;
const DEFAULT_BCRYPT_COST: u32 = 12;
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

// Password policy
const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

// Login rate limit
const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 10;
const MAX_LOGIN_MAX_ATTEMPTS: u32 = 1000;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;
const MAX_LOGIN_WINDOW_SECS: u64 = 3600;

// Mail
const DEFAULT_MAIL_FROM: &str = "noreply@alumniconnect.local";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:4200";
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;
const MIN_MAIL_TIMEOUT_SECS: u64 = 1;
const MAX_MAIL_TIMEOUT_SECS: u64 = 120;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
